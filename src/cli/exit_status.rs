use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The command completed
/// - `Error` (1): The command failed (unreadable input, write failure, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
