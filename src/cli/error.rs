//! CLI-level errors (wraps operation errors)

use thiserror::Error;

use crate::errors::CalcError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Calc(#[from] CalcError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Calc(CalcError::DivisionByZero) => exitcode::COMPUTE,
        }
    }
}
