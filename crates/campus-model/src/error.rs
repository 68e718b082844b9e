use thiserror::Error;

/// Errors raised while interpreting record values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("unknown {kind} value: {value}")]
    UnknownValue { kind: &'static str, value: String },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Client-side form validation failure.
///
/// Raised before any request is built, so a rejected record never reaches
/// the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field is empty or absent.
    #[error("{field} is required")]
    MissingField {
        /// Wire name of the field (e.g. `email`).
        field: &'static str,
    },

    /// A field is present but holds an unacceptable value.
    #[error("{field} is invalid: {reason}")]
    InvalidField {
        /// Wire name of the field.
        field: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

impl ValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => field,
        }
    }

    /// Text suitable for a notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { field } => {
                format!("Please fill in all required fields (missing: {field})")
            }
            Self::InvalidField { field, reason } => format!("Invalid {field}: {reason}"),
        }
    }
}
