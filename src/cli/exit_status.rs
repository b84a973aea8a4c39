use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the requested phases completed
/// - `Failure` (1): nothing was requested, the configuration was invalid, or a
///   phase failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The requested phases completed.
    Success,
    /// Invocation or run failed.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
