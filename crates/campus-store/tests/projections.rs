//! Property tests for filters and summaries.

use campus_model::{Fee, FeeStatus, Inquiry, InquiryStatus, Money, Student, StudentStatus};
use campus_store::StatusFilter;
use campus_store::projection::{fee_summary, filter_records, inquiry_summary};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-cA-C0-9 ]{0,6}"
}

fn student_status() -> impl Strategy<Value = StudentStatus> {
    prop_oneof![
        Just(StudentStatus::Active),
        Just(StudentStatus::Inactive),
        Just(StudentStatus::Graduated),
    ]
}

fn fee_status() -> impl Strategy<Value = FeeStatus> {
    prop_oneof![
        Just(FeeStatus::Paid),
        Just(FeeStatus::Pending),
        Just(FeeStatus::Overdue),
    ]
}

fn inquiry_status() -> impl Strategy<Value = InquiryStatus> {
    prop_oneof![
        Just(InquiryStatus::Open),
        Just(InquiryStatus::InProgress),
        Just(InquiryStatus::Resolved),
    ]
}

prop_compose! {
    fn student()(
        first_name in text(),
        last_name in text(),
        email in text(),
        phone in "[0-9-]{0,6}",
        status in student_status(),
    ) -> Student {
        Student { first_name, last_name, email, phone, status, ..Student::default() }
    }
}

prop_compose! {
    fn fee()(cents in 0i64..1_000_000, status in fee_status()) -> Fee {
        Fee { amount: Some(Money::from_cents(cents)), status, ..Fee::default() }
    }
}

fn filter() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::parse("all")),
        Just(StatusFilter::parse("ALL")),
        student_status().prop_map(StatusFilter::status),
        Just(StatusFilter::parse("active")),
    ]
}

fn contains_ci(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(&term.to_lowercase())
}

proptest! {
    #[test]
    fn combined_filter_selects_exact_subset(
        students in prop::collection::vec(student(), 0..20),
        term in "[a-cA-C0-9 ]{0,3}",
        status in filter(),
    ) {
        let selected = filter_records(&students, &term, &status);

        let expected: Vec<&Student> = students
            .iter()
            .filter(|s| {
                let search_hit = term.is_empty()
                    || [&s.first_name, &s.last_name, &s.email, &s.phone]
                        .iter()
                        .any(|field| contains_ci(field, &term));
                let status_hit = match &status {
                    StatusFilter::All => true,
                    StatusFilter::Only(wanted) => s.status.as_str().to_lowercase() == *wanted,
                };
                search_hit && status_hit
            })
            .collect();

        prop_assert_eq!(selected, expected);
    }

    #[test]
    fn fee_buckets_add_up_to_the_total(fees in prop::collection::vec(fee(), 0..30)) {
        let summary = fee_summary(&fees);
        let total: Money = fees.iter().map(Fee::amount_or_zero).sum();

        prop_assert_eq!(summary.collected + summary.pending + summary.overdue, total);
        prop_assert_eq!(summary.total_count, fees.len());
    }

    #[test]
    fn inquiry_counts_add_up_to_the_total(
        statuses in prop::collection::vec(inquiry_status(), 0..30),
    ) {
        let inquiries: Vec<Inquiry> = statuses
            .into_iter()
            .map(|status| Inquiry { status, ..Inquiry::default() })
            .collect();
        let summary = inquiry_summary(&inquiries);

        prop_assert_eq!(summary.open + summary.in_progress + summary.resolved, summary.total_count);
        prop_assert_eq!(summary.total_count, inquiries.len());
    }

    #[test]
    fn all_filter_keeps_everything(students in prop::collection::vec(student(), 0..20)) {
        prop_assert_eq!(filter_records(&students, "", &StatusFilter::All).len(), students.len());
    }
}
