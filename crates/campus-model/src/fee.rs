use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::FeeStatus;
use crate::error::ValidationError;
use crate::money::Money;
use crate::resource::{RecordId, Resource, StatusResource};
use crate::validation::{Validate, require_some, require_text};

/// A fee charged to a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Owning student. The server enforces that it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<RecordId>,
    #[serde(default)]
    pub fee_type: String,
    /// `None` until entered on a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(
        default,
        with = "crate::date::iso_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: FeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Money>,
    #[serde(
        default,
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(
        default,
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<NaiveDateTime>,
}

impl Validate for Fee {
    fn validate(&self) -> Result<(), ValidationError> {
        require_some("studentId", self.student_id.as_ref())?;
        require_text("feeType", &self.fee_type)?;
        require_some("amount", self.amount.as_ref())?;
        if self.amount.is_some_and(Money::is_negative) {
            return Err(ValidationError::InvalidField {
                field: "amount",
                reason: "must not be negative".to_string(),
            });
        }
        require_some("dueDate", self.due_date.as_ref())
    }
}

impl Fee {
    /// Amount for totals; a fee without one counts as zero.
    #[must_use]
    pub fn amount_or_zero(&self) -> Money {
        self.amount.unwrap_or_default()
    }
}

impl Resource for Fee {
    const COLLECTION: &'static str = "fees";
    const LABEL: &'static str = "fee";

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl StatusResource for Fee {
    type Status = FeeStatus;

    fn status(&self) -> &FeeStatus {
        &self.status
    }

    fn set_status(&mut self, status: FeeStatus) {
        self.status = status;
    }
}

/// Body of `POST /fees/{id}/payment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: Money,
    pub payment_method: String,
}

impl Validate for PaymentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_positive() {
            return Err(ValidationError::InvalidField {
                field: "amount",
                reason: "must be greater than zero".to_string(),
            });
        }
        require_text("paymentMethod", &self.payment_method)
    }
}
