//! Command-line layer: argument parsing, command dispatch and console output.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    let result = run::run(args)?;
    report::print(&result, verbose);
    Ok(ExitStatus::Success)
}
