//! Metadata tying record types to their REST collections.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::validation::Validate;

/// Server-assigned record identifier.
pub type RecordId = i64;

/// A record type served from a REST collection under the API base path.
pub trait Resource: Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static {
    /// Collection path segment (e.g. `students`).
    const COLLECTION: &'static str;

    /// Singular lowercase noun used in messages (e.g. `student`).
    const LABEL: &'static str;

    /// Server-assigned identifier, absent before creation.
    fn id(&self) -> Option<RecordId>;
}

/// A resource carrying a status enum. Fees and inquiries also expose a
/// narrow `PUT /{collection}/{id}/status` endpoint for it.
pub trait StatusResource: Resource {
    type Status: Clone + PartialEq + AsRef<str> + Serialize + Send + Sync + 'static;

    fn status(&self) -> &Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// Capitalise the first letter of a resource label (`student` -> `Student`).
#[must_use]
pub fn title_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
