//! Connection settings for the resource client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the back office API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

/// Upper bound on every request. Firing it is reported as a transport error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent string for API requests.
pub const USER_AGENT_VALUE: &str = concat!("campus-desk/", env!("CARGO_PKG_VERSION"));

/// Where the API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL including the `/api` prefix.
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Request timeout. Fixed; not user configurable.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        REQUEST_TIMEOUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8081/api");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }
}
