//! Record types exchanged with the campus back office API.
//!
//! Students, fees and inquiries are plain serde structs whose JSON shape
//! matches the REST contract. Each record type implements [`Validate`] for
//! the client-side required-field check and [`Resource`] to name its REST
//! collection.

pub mod dashboard;
pub mod date;
pub mod enums;
pub mod error;
pub mod fee;
pub mod inquiry;
pub mod money;
pub mod resource;
pub mod student;
pub mod validation;

pub use dashboard::{Activity, DashboardStats};
pub use enums::{ActivityKind, FeeStatus, Gender, InquiryStatus, StudentStatus};
pub use error::{ModelError, Result, ValidationError};
pub use fee::{Fee, PaymentRequest};
pub use inquiry::{Inquiry, InquiryReply};
pub use money::Money;
pub use resource::{RecordId, Resource, StatusResource, title_label};
pub use student::Student;
pub use validation::Validate;

/// Body of the narrow `PUT /{collection}/{id}/status` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}
