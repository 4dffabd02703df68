use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};
use anyhow::Result;

/// Dispatch to the command handler. No subcommand means "generate the report".
pub fn run(Arguments { command, generate: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        None => generate(args),
    }
}
