//! An interactive calculator over named 2D vectors.
//!
//! Vectors live in 26 slots named `A` through `Z`. Each input line is one
//! command (`create A 3 4`, `add A B C`, `rotate A 90 B`, ...); results are
//! either stored back into a slot or printed. Type `help` for the full list.
//!
//! Set `LOG=debug` to trace command dispatch on stderr.

mod command;
mod registry;
mod session;

use std::io;

/// Logger configured from the `LOG` variable; silent when it is unset.
fn logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOG", "off"));
    builder.format_timestamp(None);
    builder
}

/// Entry point: sets up logging, then runs the REPL over stdin/stdout until
/// end-of-input or `exit`.
fn main() -> anyhow::Result<()> {
    logger().init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(stdin.lock(), stdout.lock())?;

    log::info!("session closed");
    Ok(())
}
