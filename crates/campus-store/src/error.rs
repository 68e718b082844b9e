//! Error types surfaced by the view-state stores.

use campus_client::ApiError;
use campus_model::ValidationError;
use thiserror::Error;

/// Failure of a store action, already phrased for the user.
///
/// Every action resolves to one of these instead of propagating; the store
/// records it and pushes a matching toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A required field was missing; no request was made.
    #[error("{}", .0.user_message())]
    Validation(#[from] ValidationError),

    /// The server was unreachable or the request timed out.
    #[error("{message}")]
    Transport {
        /// Generic per-action text (`Failed to fetch students`).
        message: String,
        #[source]
        source: ApiError,
    },

    /// The server answered, but not with what was asked for.
    #[error("{message}")]
    Server {
        /// HTTP status, when there was one.
        status: Option<u16>,
        /// Server-provided message, else the per-action fallback.
        message: String,
    },
}

impl StoreError {
    /// Classify a client failure. `fallback` is used whenever the server did
    /// not provide its own message.
    #[must_use]
    pub fn from_api(error: ApiError, fallback: &str) -> Self {
        if error.is_transport() {
            Self::Transport {
                message: fallback.to_string(),
                source: error,
            }
        } else {
            Self::Server {
                status: error.status(),
                message: error.user_message(fallback),
            }
        }
    }

    /// Text for a notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Field named by a validation failure.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(error) => Some(error.field()),
            _ => None,
        }
    }
}

/// Result type alias for store actions.
pub type Result<T> = std::result::Result<T, StoreError>;
