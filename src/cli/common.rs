//! Shared CLI error and exit code types.

use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input or invalid settings
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error surfaced by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or settings (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type returned by command handlers.
pub type CliResult<T> = Result<T, CliError>;
