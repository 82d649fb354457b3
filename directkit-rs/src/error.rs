//! Error types and exit codes for DirectKit.
//!
//! Matching itself never fails; these errors come from the surrounding
//! layer (configuration, phrase input, output serialization).

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the `directkit` binary.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NO_MATCH: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for DirectKit operations.
#[derive(Error, Debug)]
pub enum DirectKitError {
    #[error("Config file not readable at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DirectKitError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DirectKitError::InvalidInput(_) | DirectKitError::JsonError(_) => {
                exit_code::INVALID_INPUT
            }
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for DirectKit operations.
pub type Result<T> = std::result::Result<T, DirectKitError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    NoMatch,
    InvalidInput,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::NoMatch => exit_code::NO_MATCH,
            ExitCode::InvalidInput => exit_code::INVALID_INPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            DirectKitError::InvalidInput("bad".to_string()).exit_code(),
            exit_code::INVALID_INPUT
        );
        assert_eq!(
            DirectKitError::Io(std::io::Error::other("boom")).exit_code(),
            exit_code::GENERAL_ERROR
        );
    }

    #[test]
    fn test_exit_code_enum() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::NoMatch.code(), 2);
    }
}
