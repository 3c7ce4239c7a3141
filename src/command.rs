//! Line parsing for the calculator.
//!
//! Parsing is pure: a line becomes a [`Command`] or a [`CommandError`], and
//! nothing touches the registry until the session executes the command.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Create { name: char, x: f32, y: f32 },
    Add { a: char, b: char, res: char },
    Sub { a: char, b: char, res: char },
    Scale { name: char, k: f32, res: char },
    Norm { name: char },
    Dot { a: char, b: char },
    Angle { a: char, b: char },
    Normalize { name: char, res: char },
    Print { name: char },
    List,
    Cross { a: char, b: char },
    Project { a: char, b: char, res: char },
    Rotate { name: char, degrees: f32, res: char },
    Distance { a: char, b: char },
    Help,
    Exit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Wrong operand count or an operand of the wrong type.
    #[error("Usage: {0}")]
    Usage(&'static str),
    /// A vector name outside A-Z.
    #[error("Error: Invalid vector name '{0}'. Use A-Z.")]
    InvalidName(char),
    /// Read of a slot that was never written.
    #[error("Error: Vector {0} is not defined.")]
    Undefined(char),
    #[error("Unknown command: {0}. Type 'help' for commands.")]
    UnknownCommand(String),
    /// Angle asked for with a zero-length operand.
    #[error("Error: Angle between {a} and {b} is undefined for a zero-length vector.")]
    UndefinedAngle { a: char, b: char },
}

/// Command names with their grammar, a description and an example, in help
/// order. Commands without operands have no example.
pub const COMMANDS: [(&str, &str, &str, Option<&str>); 16] = [
    ("create", "create <name> <x> <y>", "Create a vector", Some("create A 1.0 2.0")),
    ("add", "add <name1> <name2> <result_name>", "Add two vectors", Some("add A B C")),
    ("sub", "sub <name1> <name2> <result_name>", "Subtract two vectors", Some("sub A B C")),
    ("scale", "scale <name> <scalar> <result_name>", "Scale a vector", Some("scale A 2.5 B")),
    ("norm", "norm <name>", "Print the norm (length) of a vector", Some("norm A")),
    ("dot", "dot <name1> <name2>", "Print the dot product of two vectors", Some("dot A B")),
    ("angle", "angle <name1> <name2>", "Print the angle between two vectors", Some("angle A B")),
    ("normalize", "normalize <name> <result_name>", "Normalize a vector", Some("normalize A B")),
    ("print", "print <name>", "Print a vector", Some("print A")),
    ("list", "list", "List all defined vectors", None),
    ("cross", "cross <name1> <name2>", "Print the 2D cross product", Some("cross A B")),
    ("project", "project <vec_to_project> <vec_to_project_on> <result_name>", "Project vector a onto b", Some("project A B C")),
    ("rotate", "rotate <name> <degrees> <result_name>", "Rotate a vector by degrees", Some("rotate A 90 B")),
    ("distance", "distance <name1> <name2>", "Print the distance between two vectors", Some("distance A B")),
    ("help", "help", "Display this help message", None),
    ("exit", "exit", "Exit the program", None),
];

pub fn usage(cmd: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|(name, _, _, _)| *name == cmd)
        .map(|(_, grammar, _, _)| *grammar)
        .unwrap_or("help")
}

/// Operand cursor over the tokens following the command word.
struct Operands<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    usage: &'static str,
}

impl<'a> Operands<'a> {
    fn name(&mut self) -> Result<char, CommandError> {
        let token = self.tokens.next().ok_or(CommandError::Usage(self.usage))?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c.to_ascii_uppercase()),
            _ => Err(CommandError::Usage(self.usage)),
        }
    }

    fn scalar(&mut self) -> Result<f32, CommandError> {
        let token = self.tokens.next().ok_or(CommandError::Usage(self.usage))?;
        match token.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CommandError::Usage(self.usage)),
        }
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.tokens.next() {
            Some(_) => Err(CommandError::Usage(self.usage)),
            None => Ok(()),
        }
    }
}

impl Command {
    /// Parses one input line. A blank line yields `Ok(None)`.
    ///
    /// Name operands are upper-cased here but not range-checked; that
    /// happens against the registry so parse errors always win over name
    /// errors.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let cmd = match tokens.next() {
            Some(cmd) => cmd,
            None => return Ok(None),
        };
        if !COMMANDS.iter().any(|(name, _, _, _)| *name == cmd) {
            return Err(CommandError::UnknownCommand(cmd.to_string()));
        }
        let mut ops = Operands { tokens, usage: usage(cmd) };

        let command = match cmd {
            "create" => Command::Create { name: ops.name()?, x: ops.scalar()?, y: ops.scalar()? },
            "add" => Command::Add { a: ops.name()?, b: ops.name()?, res: ops.name()? },
            "sub" => Command::Sub { a: ops.name()?, b: ops.name()?, res: ops.name()? },
            "scale" => Command::Scale { name: ops.name()?, k: ops.scalar()?, res: ops.name()? },
            "norm" => Command::Norm { name: ops.name()? },
            "dot" => Command::Dot { a: ops.name()?, b: ops.name()? },
            "angle" => Command::Angle { a: ops.name()?, b: ops.name()? },
            "normalize" => Command::Normalize { name: ops.name()?, res: ops.name()? },
            "print" => Command::Print { name: ops.name()? },
            "list" => Command::List,
            "cross" => Command::Cross { a: ops.name()?, b: ops.name()? },
            "project" => Command::Project { a: ops.name()?, b: ops.name()?, res: ops.name()? },
            "rotate" => Command::Rotate { name: ops.name()?, degrees: ops.scalar()?, res: ops.name()? },
            "distance" => Command::Distance { a: ops.name()?, b: ops.name()? },
            "help" => Command::Help,
            _ => Command::Exit,
        };
        ops.finish()?;
        Ok(Some(command))
    }
}
