//! Client-side presence checks run before a record is submitted.

use crate::error::ValidationError;

/// Records that can be checked for required fields before submission.
pub trait Validate {
    /// Returns the first failing field, in form order.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails when `value` is empty or whitespace.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

/// Fails when `value` is `None`.
pub fn require_some<T>(field: &'static str, value: Option<&T>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_counts_as_missing() {
        assert!(require_text("name", "  ").is_err());
        assert!(require_text("name", "Ada").is_ok());
    }

    #[test]
    fn none_counts_as_missing() {
        assert_eq!(
            require_some::<u8>("gender", None),
            Err(ValidationError::MissingField { field: "gender" })
        );
    }
}
