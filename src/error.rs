//! Error taxonomy and exit codes

use thiserror::Error;

/// Exit status for argument and usage errors
pub const EXIT_USAGE: i32 = 2;

/// Exit status for I/O, state, and external command failures
pub const EXIT_FAILURE: i32 = 1;

/// Errors that terminate a command with a specific exit status
#[derive(Debug, Error)]
pub enum MkError {
    /// Bad arguments or a malformed project identifier
    #[error("{0}")]
    Usage(String),

    /// A required file is missing or a destination already exists
    #[error("{0}")]
    Precondition(String),

    /// An external command exited unsuccessfully or could not be spawned
    #[error("command `{command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },
}

impl MkError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Precondition(_) | Self::Command { .. } => EXIT_FAILURE,
        }
    }
}

/// Map any error bubbling out of a command to a process exit status
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MkError>()
        .map(MkError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
