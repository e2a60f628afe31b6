use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// User supplied configuration that was rejected; state is left unchanged.
    #[error("{0}")]
    Validation(String),

    /// A caller broke a formatting contract (e.g. passed a negative duration).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClockError::Validation("Enter a positive whole minute value.".to_string());
        assert_eq!(err.to_string(), "Enter a positive whole minute value.");

        let err = ClockError::InvalidInput("negative duration".to_string());
        assert_eq!(err.to_string(), "invalid input: negative duration");
    }

    #[test]
    fn test_error_variants_are_distinct() {
        assert_ne!(
            ClockError::Validation("x".into()),
            ClockError::InvalidInput("x".into())
        );
    }
}
