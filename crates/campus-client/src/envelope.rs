//! The optional `{success, data, message}` response wrapper.

use serde_json::Value;

use crate::error::{ApiError, Result};

/// A response body, either wrapped in the API envelope or bare.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// `{ "success": bool, "data": T, "message"?: string }`
    Wrapped {
        success: bool,
        data: T,
        message: Option<String>,
    },
    /// The payload itself.
    Bare(T),
}

impl Envelope<Value> {
    /// Classify a decoded body. An object with a boolean `success` and a
    /// `data` key is wrapped; anything else is the payload.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map)
                if map.get("success").is_some_and(Value::is_boolean) && map.contains_key("data") =>
            {
                let success = map
                    .get("success")
                    .and_then(Value::as_bool)
                    .unwrap_or_default();
                let data = map.remove("data").unwrap_or(Value::Null);
                let message = map
                    .remove("message")
                    .and_then(|m| m.as_str().map(str::to_string));
                Self::Wrapped {
                    success,
                    data,
                    message,
                }
            }
            other => Self::Bare(other),
        }
    }

    /// Parse a raw body. Empty bodies read as `null`.
    pub fn parse(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::Bare(Value::Null));
        }
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }
}

impl<T> Envelope<T> {
    /// Unwrap the payload. A `success: false` envelope becomes a server
    /// error carrying its message.
    pub fn into_payload(self, status: u16) -> Result<T> {
        match self {
            Self::Wrapped {
                success: true,
                data,
                ..
            }
            | Self::Bare(data) => Ok(data),
            Self::Wrapped {
                success: false,
                message,
                ..
            } => Err(ApiError::Server { status, message }),
        }
    }

    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped { .. })
    }
}
