//! Result type alias for the pseudonymizer

use super::errors::PseudonymError;

/// Result type alias used throughout the crate for fallible operations
pub type Result<T> = std::result::Result<T, PseudonymError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PseudonymError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PseudonymError::Unexpected("boom".to_string()));
        assert!(result.is_err());
    }
}
