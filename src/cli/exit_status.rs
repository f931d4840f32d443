use std::process::ExitCode;

/// Exit status for the tid CLI.
///
/// - `Success` (0): Output file written, report printed
/// - `Error` (1): Input unreadable, parse failure, or write failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed (input, parse, or output error).
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
