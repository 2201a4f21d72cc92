//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Every fatal error is caught at the top level, logged, printed to the
//! user, and terminates the process with exit status 1.

use thiserror::Error;

/// Main error type for the pseudonymizer
#[derive(Debug, Error)]
pub enum PseudonymError {
    /// Configuration-related errors (unsupported locale, invalid log level)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required file (input file or name-list file) does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Read/write failures other than not-found
    #[error("I/O error: {0}")]
    Io(String),

    /// The detected encoding cannot decode the input byte stream
    #[error("Decode error: {0}")]
    Decode(String),

    /// Catch-all for errors that don't fit another kind
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<std::io::Error> for PseudonymError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => PseudonymError::FileNotFound(err.to_string()),
            _ => PseudonymError::Io(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PseudonymError::Configuration("Unsupported locale: xx_XX".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Unsupported locale: xx_XX"
        );
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: PseudonymError = io_err.into();
        assert!(matches!(err, PseudonymError::FileNotFound(_)));
    }

    #[test]
    fn test_io_other_maps_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PseudonymError = io_err.into();
        assert!(matches!(err, PseudonymError::Io(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = PseudonymError::Decode("invalid byte sequence".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
