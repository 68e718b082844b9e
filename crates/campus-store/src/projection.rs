//! Derived views over in-memory collections.
//!
//! Everything here is a pure function of the records passed in and is
//! recomputed on every call. Summaries always run over the full collection,
//! never over a filtered view.

use std::fmt;

use campus_model::{Fee, FeeStatus, Inquiry, InquiryStatus, Money, RecordId, StatusResource, Student};

/// Rendered in place of a fee's student when the id does not resolve.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

// =============================================================================
// FILTERS
// =============================================================================

/// Status filter of a list view.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every record passes.
    #[default]
    All,
    /// Only records whose status equals this lowercased wire value.
    Only(String),
}

impl StatusFilter {
    /// `all` (any case, or blank) selects everything; anything else is a
    /// status to match.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_lowercase())
        }
    }

    /// Filter on one status value.
    pub fn status(status: impl AsRef<str>) -> Self {
        Self::parse(status.as_ref())
    }

    /// Case-insensitive exact match against a wire status.
    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status.to_lowercase() == *wanted,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => f.write_str(status),
        }
    }
}

/// Case-insensitive substring match. An empty term matches everything;
/// whitespace is part of the term and is not trimmed.
pub fn matches_search<'a>(term: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records searched by a fixed set of their own text fields.
pub trait Searchable {
    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
        ]
    }
}

impl Searchable for Inquiry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.subject.as_str()]
    }
}

/// Records passing both the search term and the status filter, in order.
pub fn filter_records<'a, R>(records: &'a [R], term: &str, status: &StatusFilter) -> Vec<&'a R>
where
    R: StatusResource + Searchable,
{
    records
        .iter()
        .filter(|record| {
            matches_search(term, record.search_fields())
                && status.matches(record.status().as_ref())
        })
        .collect()
}

/// Fees passing the filters. Fees are searched by resolved student name and
/// fee type.
pub fn filter_fees<'a>(
    fees: &'a [Fee],
    students: &[Student],
    term: &str,
    status: &StatusFilter,
) -> Vec<&'a Fee> {
    fees.iter()
        .filter(|fee| {
            let name = student_name(students, fee.student_id);
            matches_search(term, [name.as_str(), fee.fee_type.as_str()])
                && status.matches(fee.status.as_str())
        })
        .collect()
}

// =============================================================================
// DISPLAY NAMES
// =============================================================================

/// `first last` of the referenced student, or [`UNKNOWN_STUDENT`].
pub fn student_name(students: &[Student], student_id: Option<RecordId>) -> String {
    student_id
        .and_then(|id| students.iter().find(|s| s.id == Some(id)))
        .map_or_else(|| UNKNOWN_STUDENT.to_string(), Student::full_name)
}

// =============================================================================
// SUMMARIES
// =============================================================================

/// Fee totals by status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeeSummary {
    /// Sum of paid fees.
    pub collected: Money,
    pub pending: Money,
    pub overdue: Money,
    /// Every fee, whatever its status.
    pub total_count: usize,
}

/// Sum amounts by status in one pass. Unknown statuses count toward
/// `total_count` only.
pub fn fee_summary(fees: &[Fee]) -> FeeSummary {
    fees.iter().fold(FeeSummary::default(), |mut summary, fee| {
        match fee.status {
            FeeStatus::Paid => summary.collected += fee.amount_or_zero(),
            FeeStatus::Pending => summary.pending += fee.amount_or_zero(),
            FeeStatus::Overdue => summary.overdue += fee.amount_or_zero(),
            FeeStatus::Other(_) => {}
        }
        summary.total_count += 1;
        summary
    })
}

/// Inquiry counts by status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InquirySummary {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub total_count: usize,
}

/// Count inquiries by status in one pass. Closed and unknown statuses count
/// toward `total_count` only.
pub fn inquiry_summary(inquiries: &[Inquiry]) -> InquirySummary {
    inquiries
        .iter()
        .fold(InquirySummary::default(), |mut summary, inquiry| {
            match inquiry.status {
                InquiryStatus::Open => summary.open += 1,
                InquiryStatus::InProgress => summary.in_progress += 1,
                InquiryStatus::Resolved => summary.resolved += 1,
                InquiryStatus::Closed | InquiryStatus::Other(_) => {}
            }
            summary.total_count += 1;
            summary
        })
}

/// Empty-list text: distinguishes "nothing yet" from "nothing matches".
pub fn empty_state_message(collection: &str, total: usize) -> String {
    if total == 0 {
        format!("No {collection} have been added yet.")
    } else {
        format!("No {collection} match your search criteria.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_model::StudentStatus;

    fn student(id: RecordId, first: &str, last: &str) -> Student {
        Student {
            id: Some(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.edu", first.to_lowercase()),
            phone: "555-0100".to_string(),
            ..Student::default()
        }
    }

    fn fee(student_id: Option<RecordId>, fee_type: &str, cents: i64, status: FeeStatus) -> Fee {
        Fee {
            student_id,
            fee_type: fee_type.to_string(),
            amount: Some(Money::from_cents(cents)),
            status,
            ..Fee::default()
        }
    }

    #[test]
    fn status_filter_parses_all_in_any_case() {
        assert_eq!(StatusFilter::parse("ALL"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("In_Progress"),
            StatusFilter::Only("in_progress".to_string())
        );
        assert!(StatusFilter::parse("paid").matches("Paid"));
        assert!(!StatusFilter::parse("paid").matches("Pending"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search("", ["anything"]));
        assert!(matches_search("", std::iter::empty()));
    }

    #[test]
    fn whitespace_in_the_term_is_significant() {
        let students = vec![student(1, "Ada", "Lovelace")];
        assert!(filter_records(&students, "da ", &StatusFilter::All).is_empty());
        assert!(filter_records(&students, "  ", &StatusFilter::All).is_empty());
        assert_eq!(filter_records(&students, "da", &StatusFilter::All).len(), 1);
    }

    #[test]
    fn student_search_covers_names_email_and_phone() {
        let students = vec![student(1, "Ada", "Lovelace"), student(2, "Alan", "Turing")];
        let by_last = filter_records(&students, "TURING", &StatusFilter::All);
        assert_eq!(by_last.len(), 1);
        assert_eq!(by_last[0].id, Some(2));

        let by_phone = filter_records(&students, "0100", &StatusFilter::All);
        assert_eq!(by_phone.len(), 2);
    }

    #[test]
    fn search_and_status_combine() {
        let mut graduated = student(3, "Grace", "Hopper");
        graduated.status = StudentStatus::Graduated;
        let students = vec![student(1, "Ada", "Lovelace"), graduated];

        let found = filter_records(&students, "a", &StatusFilter::parse("graduated"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Grace");
    }

    #[test]
    fn unresolved_student_is_unknown() {
        let students = vec![student(1, "Ada", "Lovelace")];
        assert_eq!(student_name(&students, Some(1)), "Ada Lovelace");
        assert_eq!(student_name(&students, Some(9)), UNKNOWN_STUDENT);
        assert_eq!(student_name(&students, None), UNKNOWN_STUDENT);
    }

    #[test]
    fn fee_search_uses_student_name_and_type() {
        let students = vec![student(1, "Ada", "Lovelace")];
        let fees = vec![
            fee(Some(1), "Tuition", 10_000, FeeStatus::Paid),
            fee(Some(2), "Library", 500, FeeStatus::Pending),
        ];

        assert_eq!(filter_fees(&fees, &students, "lovelace", &StatusFilter::All).len(), 1);
        assert_eq!(filter_fees(&fees, &students, "unknown", &StatusFilter::All).len(), 1);
        assert_eq!(filter_fees(&fees, &students, "libr", &StatusFilter::All).len(), 1);
        assert!(filter_fees(&fees, &students, "tuition", &StatusFilter::parse("pending")).is_empty());
    }

    #[test]
    fn empty_fee_list_summarises_to_zero() {
        let summary = fee_summary(&[]);
        assert_eq!(summary, FeeSummary::default());
        assert_eq!(summary.collected.to_string(), "$0.00");
        assert_eq!(summary.pending.to_string(), "$0.00");
        assert_eq!(summary.overdue.to_string(), "$0.00");
    }

    #[test]
    fn paid_and_pending_fees_summarise() {
        let fees = vec![
            fee(Some(1), "Tuition", 10_000, FeeStatus::Paid),
            fee(Some(1), "Lab", 5_050, FeeStatus::Pending),
        ];
        let summary = fee_summary(&fees);
        assert_eq!(summary.collected.to_string(), "$100.00");
        assert_eq!(summary.pending.to_string(), "$50.50");
        assert_eq!(summary.overdue, Money::ZERO);
        assert_eq!(summary.total_count, 2);
    }

    #[test]
    fn unknown_fee_status_counts_only_toward_total() {
        let fees = vec![fee(
            Some(1),
            "Tuition",
            1_000,
            FeeStatus::Other("Partially Paid".to_string()),
        )];
        let summary = fee_summary(&fees);
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.collected + summary.pending + summary.overdue, Money::ZERO);
    }

    #[test]
    fn inquiry_summary_counts_by_status() {
        let inquiries: Vec<Inquiry> = [
            InquiryStatus::Open,
            InquiryStatus::Open,
            InquiryStatus::InProgress,
            InquiryStatus::Resolved,
            InquiryStatus::Closed,
        ]
        .into_iter()
        .map(|status| Inquiry {
            status,
            ..Inquiry::default()
        })
        .collect();

        let summary = inquiry_summary(&inquiries);
        assert_eq!(
            summary,
            InquirySummary {
                open: 2,
                in_progress: 1,
                resolved: 1,
                total_count: 5
            }
        );
    }

    #[test]
    fn empty_state_distinguishes_no_data_from_no_match() {
        assert_eq!(empty_state_message("fees", 0), "No fees have been added yet.");
        assert_eq!(
            empty_state_message("fees", 3),
            "No fees match your search criteria."
        );
    }
}
