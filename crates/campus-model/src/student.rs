use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{Gender, StudentStatus};
use crate::error::ValidationError;
use crate::resource::{RecordId, Resource, StatusResource};
use crate::validation::{Validate, require_some, require_text};

/// A student record.
///
/// Text fields default to empty so that partially filled forms can be held
/// in the same type that is sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(
        default,
        with = "crate::date::iso_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub status: StudentStatus,
    /// Assigned by the server on creation.
    #[serde(
        default,
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub enrollment_date: Option<NaiveDateTime>,
}

impl Student {
    /// `first last`, as shown in lists and fee rows.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Validate for Student {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("email", &self.email)?;
        require_text("phone", &self.phone)?;
        require_some("dateOfBirth", self.date_of_birth.as_ref())?;
        require_some("gender", self.gender.as_ref())?;
        require_text("course", &self.course)?;
        require_text("address", &self.address)
    }
}

impl Resource for Student {
    const COLLECTION: &'static str = "students";
    const LABEL: &'static str = "student";

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl StatusResource for Student {
    type Status = StudentStatus;

    fn status(&self) -> &StudentStatus {
        &self.status
    }

    fn set_status(&mut self, status: StudentStatus) {
        self.status = status;
    }
}
