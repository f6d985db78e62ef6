//! Error types for heatman.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for malformed command lines.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for input/output and encoding failures.
pub const EXIT_IO: i32 = 2;

/// Exit code for invalid option values.
pub const EXIT_CONFIG: i32 = 3;

/// Result type alias using HeatmanError.
pub type HeatmanResult<T> = Result<T, HeatmanError>;

/// Primary error type for heatman operations.
///
/// Cell-level parse failures are not represented here: an unparseable cell
/// becomes an absent value and rendering continues.
#[derive(Debug, Error)]
pub enum HeatmanError {
    // === Configuration Errors ===
    #[error("{0}: unknown header model")]
    InvalidHeaderMode(String),

    #[error("{0}: unknown color type")]
    InvalidColorMode(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Usage Errors ===
    #[error("{0}")]
    Usage(String),

    // === I/O Errors ===
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    // === Encoding Errors ===
    #[error("Encoding failed: {0}")]
    Encode(String),
}

impl HeatmanError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HeatmanError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while validating options, before any I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HeatmanError::InvalidHeaderMode(_)
                | HeatmanError::InvalidColorMode(_)
                | HeatmanError::InvalidParameter { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeatmanError::Usage(_) => EXIT_USAGE,

            HeatmanError::Io { .. } | HeatmanError::Stream(_) | HeatmanError::Encode(_) => EXIT_IO,

            HeatmanError::InvalidHeaderMode(_)
            | HeatmanError::InvalidColorMode(_)
            | HeatmanError::InvalidParameter { .. } => EXIT_CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let usage = HeatmanError::Usage("too many arguments".to_string());
        let io = HeatmanError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let config = HeatmanError::InvalidHeaderMode("sideways".to_string());

        assert_eq!(usage.exit_code(), 1);
        assert_eq!(io.exit_code(), 2);
        assert_eq!(config.exit_code(), 3);
        assert!(config.is_configuration());
        assert!(!io.is_configuration());
    }

    #[test]
    fn test_io_error_message_includes_path() {
        let err = HeatmanError::io(
            "out/heatman.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "out/heatman.png: denied");
    }
}
