//! Typed client for the campus back office REST API.
//!
//! [`ResourceClient`] exposes one operation per resource and verb. Bodies may
//! or may not be wrapped in the `{success, data, message}` envelope; both
//! shapes decode to the same payload. Every failure is reported as an
//! [`ApiError`].
//!
//! # Example
//!
//! ```no_run
//! use campus_client::{ClientSettings, ResourceClient};
//!
//! # async fn run() -> campus_client::Result<()> {
//! let client = ResourceClient::connect(&ClientSettings::default())?;
//! let students = client.list_students().await?;
//! println!("{} students", students.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;
pub mod transport;

pub use client::ResourceClient;
pub use config::{ClientSettings, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use envelope::Envelope;
pub use error::{ApiError, Result};
#[cfg(any(test, feature = "test-support"))]
pub use mock::MockTransport;
pub use reqwest::Method;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
