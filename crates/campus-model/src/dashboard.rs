use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityKind;
use crate::money::Money;

/// Headline figures for the dashboard. Fetched fresh on every visit.
///
/// Every field defaults, so a sparse payload still renders and
/// `DashboardStats::default()` is the all-zero fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_students: u64,
    pub new_admissions: u64,
    pub fees_collected: Money,
    pub pending_inquiries: u64,
    #[serde(
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<NaiveDateTime>,
}

impl DashboardStats {
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        self.total_students == 0
            && self.new_admissions == 0
            && self.fees_collected == Money::ZERO
            && self.pending_inquiries == 0
    }
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    /// Relative time text supplied by the server (e.g. `2 hours ago`).
    pub time: String,
    #[serde(
        with = "crate::date::iso_timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<NaiveDateTime>,
}
