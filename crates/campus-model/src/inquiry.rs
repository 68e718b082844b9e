use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::InquiryStatus;
use crate::error::ValidationError;
use crate::resource::{RecordId, Resource, StatusResource};
use crate::validation::{Validate, require_text};

/// An inquiry ticket submitted by a prospective student or parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        default,
        rename = "phone",
        alias = "phoneNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(
        default,
        alias = "createdDate",
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub inquiry_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(
        default,
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_date: Option<NaiveDateTime>,
}

impl Validate for Inquiry {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_text("subject", &self.subject)?;
        require_text("message", &self.message)
    }
}

impl Resource for Inquiry {
    const COLLECTION: &'static str = "inquiries";
    const LABEL: &'static str = "inquiry";

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl StatusResource for Inquiry {
    type Status = InquiryStatus;

    fn status(&self) -> &InquiryStatus {
        &self.status
    }

    fn set_status(&mut self, status: InquiryStatus) {
        self.status = status;
    }
}

/// Body of `POST /inquiries/{id}/respond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryReply {
    pub response: String,
}

impl Validate for InquiryReply {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("response", &self.response)
    }
}
