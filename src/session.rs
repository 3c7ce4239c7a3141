use std::io::{BufRead, Write};

use anyhow::Context;
use log::{debug, info, warn};
use rvec::library::*;

use crate::command::{Command, CommandError, COMMANDS};
use crate::registry::Registry;

/// Greeting printed once before the first prompt.
pub const BANNER: &str = "Vector 2D REPL. Type 'help' for commands, 'exit' to quit.";
/// Prompt printed before each line is read.
pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Silent,
    Exit,
}

pub struct Session {
    registry: Registry,
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            registry: Registry::new(),
        }
    }

    /// Processes one input line, turning every per-command error into its
    /// message so the loop can carry on.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Silent,
            Err(err) => {
                warn!("rejected {:?}: {:?}", line.trim(), err);
                return Reply::Output(err.to_string());
            }
        };
        debug!("dispatching {:?}", command);
        match self.execute(command) {
            Ok(reply) => reply,
            Err(err) => {
                warn!("{:?} failed: {:?}", command, err);
                Reply::Output(err.to_string())
            }
        }
    }

    /// Runs a parsed command against the registry. The registry is only
    /// written once every name has been validated and every read operand
    /// is defined.
    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let text = match command {
            Command::Create { name, x, y } => self.store(name, Vector::new(x, y))?,
            Command::Add { a, b, res } => {
                let (va, vb) = self.pair(a, b, Some(res))?;
                self.store(res, add(va, vb))?
            }
            Command::Sub { a, b, res } => {
                let (va, vb) = self.pair(a, b, Some(res))?;
                self.store(res, sub(va, vb))?
            }
            Command::Scale { name, k, res } => {
                let v = self.single(name, Some(res))?;
                self.store(res, scale(v, k))?
            }
            Command::Norm { name } => {
                let v = self.single(name, None)?;
                format!("|{}| = {}", name, fixed(norm(v)))
            }
            Command::Dot { a, b } => {
                let (va, vb) = self.pair(a, b, None)?;
                format!("{} . {} = {}", a, b, fixed(dot(va, vb)))
            }
            Command::Angle { a, b } => {
                let (va, vb) = self.pair(a, b, None)?;
                let angle = checked_angle_between(va, vb)
                    .ok_or(CommandError::UndefinedAngle { a, b })?;
                format!("Angle between {} and {}: {} degrees", a, b, fixed(angle))
            }
            Command::Normalize { name, res } => {
                let v = self.single(name, Some(res))?;
                self.store(res, normalize(v))?
            }
            Command::Print { name } => {
                let v = self.single(name, None)?;
                format!("{} = {}", name, v)
            }
            Command::List => self.list(),
            Command::Cross { a, b } => {
                let (va, vb) = self.pair(a, b, None)?;
                format!("{} x {} = {}", a, b, fixed(cross(va, vb)))
            }
            Command::Project { a, b, res } => {
                let (va, vb) = self.pair(a, b, Some(res))?;
                self.store(res, project(va, vb))?
            }
            Command::Rotate { name, degrees, res } => {
                let v = self.single(name, Some(res))?;
                self.store(res, rotate(v, degrees))?
            }
            Command::Distance { a, b } => {
                let (va, vb) = self.pair(a, b, None)?;
                format!("Distance between {} and {}: {}", a, b, fixed(distance(va, vb)))
            }
            Command::Help => help(),
            Command::Exit => return Ok(Reply::Exit),
        };
        Ok(Reply::Output(text))
    }

    fn single(&self, name: char, res: Option<char>) -> Result<Vector, CommandError> {
        Registry::index(name)?;
        if let Some(res) = res {
            Registry::index(res)?;
        }
        self.registry.get(name)
    }

    fn pair(&self, a: char, b: char, res: Option<char>) -> Result<(Vector, Vector), CommandError> {
        Registry::index(a)?;
        Registry::index(b)?;
        if let Some(res) = res {
            Registry::index(res)?;
        }
        Ok((self.registry.get(a)?, self.registry.get(b)?))
    }

    fn store(&mut self, name: char, value: Vector) -> Result<String, CommandError> {
        self.registry.set(name, value)?;
        Ok(format!("{} = {}", name, value))
    }

    fn list(&self) -> String {
        let mut lines = vec![String::from("Defined vectors:")];
        for (name, value) in self.registry.defined() {
            lines.push(format!("{} = {}", name, value));
        }
        if lines.len() == 1 {
            lines.push(String::from("  No vectors defined."));
        }
        lines.join("\n")
    }
}

fn help() -> String {
    let width = COMMANDS.iter().map(|(_, grammar, _, _)| grammar.len()).max().unwrap_or(0);
    let mut lines = vec![String::from("Available commands:")];
    for (_, grammar, description, example) in COMMANDS.iter() {
        let line = match example {
            Some(example) => format!("  {grammar:<width$} - {description} (e.g., {example})"),
            None => format!("  {grammar:<width$} - {description}"),
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Reads commands from `input` until end-of-input or `exit`, writing the
/// banner, prompts and replies to `output`.
///
/// # Arguments
///
/// * `input` - Line source, normally locked stdin
/// * `output` - Transcript sink, normally locked stdout
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut line = String::new();
    writeln!(output, "{}", BANNER).context("failed to write banner")?;

    loop {
        write!(output, "{}", PROMPT).context("failed to write prompt")?;
        output.flush().context("failed to flush output")?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read input line")?;
        if read == 0 {
            info!("end of input");
            break;
        }

        match session.handle_line(&line) {
            Reply::Output(text) => writeln!(output, "{}", text).context("failed to write reply")?,
            Reply::Silent => {}
            Reply::Exit => {
                info!("exit requested");
                break;
            }
        }
    }
    Ok(())
}
