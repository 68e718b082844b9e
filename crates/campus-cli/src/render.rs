//! Terminal rendering for lists, summaries and detail views.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use campus_client::ClientSettings;
use campus_model::date::{display_date, display_timestamp_date};
use campus_model::{
    Activity, DashboardStats, Fee, FeeStatus, Inquiry, InquiryStatus, Student, StudentStatus,
};
use campus_store::{FeeSummary, InquirySummary};

pub fn students_table(students: &[&Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Phone"),
        header_cell("Course"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for student in students {
        table.add_row(vec![
            id_cell(student.id),
            Cell::new(student.full_name()),
            Cell::new(&student.email),
            Cell::new(&student.phone),
            Cell::new(&student.course),
            student_status_cell(&student.status),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

/// Fee rows. `student_name` resolves the owning student for display.
pub fn fees_table(fees: &[&Fee], student_name: impl Fn(&Fee) -> String) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Student"),
        header_cell("Fee type"),
        header_cell("Amount"),
        header_cell("Due"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for fee in fees {
        table.add_row(vec![
            id_cell(fee.id),
            Cell::new(student_name(fee)),
            Cell::new(&fee.fee_type),
            fee.amount.map_or_else(|| dim_cell("-"), Cell::new),
            fee.due_date
                .map_or_else(|| dim_cell("-"), |date| Cell::new(display_date(date))),
            fee_status_cell(&fee.status),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

pub fn inquiries_table(inquiries: &[&Inquiry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Subject"),
        header_cell("Received"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for inquiry in inquiries {
        table.add_row(vec![
            id_cell(inquiry.id),
            Cell::new(&inquiry.name),
            Cell::new(&inquiry.email),
            Cell::new(&inquiry.subject),
            inquiry.inquiry_date.map_or_else(
                || dim_cell("-"),
                |timestamp| Cell::new(display_timestamp_date(timestamp)),
            ),
            inquiry_status_cell(&inquiry.status),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn fee_summary_text(summary: &FeeSummary) -> String {
    format!(
        "Collected: {}\nPending:   {}\nOverdue:   {}\nFees:      {}",
        summary.collected, summary.pending, summary.overdue, summary.total_count
    )
}

pub fn inquiry_summary_text(summary: &InquirySummary) -> String {
    format!(
        "Open: {}  In progress: {}  Resolved: {}  Total: {}",
        summary.open, summary.in_progress, summary.resolved, summary.total_count
    )
}

pub fn dashboard_text(stats: &DashboardStats, activities: &[Activity]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total students:     {}", stats.total_students);
    let _ = writeln!(out, "New admissions:     {}", stats.new_admissions);
    let _ = writeln!(out, "Fees collected:     {}", stats.fees_collected);
    let _ = writeln!(out, "Pending inquiries:  {}", stats.pending_inquiries);
    if let Some(updated) = stats.last_updated {
        let _ = writeln!(out, "Last updated:       {}", display_timestamp_date(updated));
    }
    out.push('\n');
    if activities.is_empty() {
        out.push_str("No recent activity.");
        return out;
    }
    out.push_str("Recent activity:");
    for activity in activities {
        let _ = write!(
            out,
            "\n  [{}] {}",
            activity.kind.as_str(),
            activity.message
        );
        if !activity.time.is_empty() {
            let _ = write!(out, " ({})", activity.time);
        }
    }
    out
}

pub fn student_detail(student: &Student) -> String {
    let optional = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}", student.full_name());
    let _ = writeln!(out, "  ID:            {}", student.id.map_or_else(|| "-".to_string(), |id| id.to_string()));
    let _ = writeln!(out, "  Email:         {}", optional(&student.email));
    let _ = writeln!(out, "  Phone:         {}", optional(&student.phone));
    let _ = writeln!(out, "  Address:       {}", optional(&student.address));
    let _ = writeln!(
        out,
        "  Date of birth: {}",
        student.date_of_birth.map_or_else(|| "-".to_string(), display_date)
    );
    let _ = writeln!(
        out,
        "  Gender:        {}",
        student.gender.map_or("-", |gender| gender.as_str())
    );
    let _ = writeln!(out, "  Course:        {}", optional(&student.course));
    let _ = write!(out, "  Status:        {}", student.status);
    if let Some(enrolled) = student.enrollment_date {
        let _ = write!(out, "\n  Enrolled:      {}", display_timestamp_date(enrolled));
    }
    out
}

pub fn settings_text(settings: &ClientSettings) -> String {
    format!(
        "base_url = {}\ntimeout  = {}s",
        settings.base_url,
        settings.timeout().as_secs()
    )
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn id_cell(id: Option<i64>) -> Cell {
    match id {
        Some(id) => Cell::new(id),
        None => dim_cell("-"),
    }
}

fn status_cell(label: String, color: Color) -> Cell {
    Cell::new(label).fg(color)
}

fn student_status_cell(status: &StudentStatus) -> Cell {
    let color = match status {
        StudentStatus::Active => Color::Green,
        StudentStatus::Inactive => Color::Yellow,
        StudentStatus::Graduated => Color::Cyan,
        StudentStatus::Other(_) => Color::DarkGrey,
    };
    status_cell(status.label(), color)
}

fn fee_status_cell(status: &FeeStatus) -> Cell {
    let cell = match status {
        FeeStatus::Paid => status_cell(status.label(), Color::Green),
        FeeStatus::Pending => status_cell(status.label(), Color::Yellow),
        FeeStatus::Overdue => status_cell(status.label(), Color::Red),
        FeeStatus::Other(_) => status_cell(status.label(), Color::DarkGrey),
    };
    if matches!(status, FeeStatus::Overdue) {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn inquiry_status_cell(status: &InquiryStatus) -> Cell {
    let color = match status {
        InquiryStatus::Open => Color::Yellow,
        InquiryStatus::InProgress => Color::Cyan,
        InquiryStatus::Resolved => Color::Green,
        InquiryStatus::Closed | InquiryStatus::Other(_) => Color::DarkGrey,
    };
    status_cell(status.label(), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_model::{ActivityKind, Gender, Money};
    use chrono::NaiveDate;

    fn student() -> Student {
        Student {
            id: Some(12),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.edu".into(),
            phone: "555-0101".into(),
            address: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(2004, 12, 10),
            gender: Some(Gender::Female),
            course: "Mathematics".into(),
            status: StudentStatus::Active,
            enrollment_date: None,
        }
    }

    #[test]
    fn fee_summary_block() {
        let summary = FeeSummary {
            collected: Money::from_cents(10_000),
            pending: Money::from_cents(5_050),
            overdue: Money::ZERO,
            total_count: 3,
        };
        insta::assert_snapshot!(fee_summary_text(&summary), @r"
        Collected: $100.00
        Pending:   $50.50
        Overdue:   $0.00
        Fees:      3
        ");
    }

    #[test]
    fn inquiry_summary_line() {
        let summary = InquirySummary {
            open: 1,
            in_progress: 1,
            resolved: 1,
            total_count: 4,
        };
        insta::assert_snapshot!(
            inquiry_summary_text(&summary),
            @"Open: 1  In progress: 1  Resolved: 1  Total: 4"
        );
    }

    #[test]
    fn student_detail_view() {
        insta::assert_snapshot!(student_detail(&student()), @r"
        Ada Lovelace
          ID:            12
          Email:         ada@example.edu
          Phone:         555-0101
          Address:       -
          Date of birth: 2004-12-10
          Gender:        Female
          Course:        Mathematics
          Status:        Active
        ");
    }

    #[test]
    fn zeroed_dashboard_still_renders() {
        insta::assert_snapshot!(dashboard_text(&DashboardStats::default(), &[]), @r"
        Total students:     0
        New admissions:     0
        Fees collected:     $0.00
        Pending inquiries:  0

        No recent activity.
        ");
    }

    #[test]
    fn dashboard_lists_activity() {
        let activities = vec![Activity {
            kind: ActivityKind::Payment,
            message: "Fee paid by Ada Lovelace".into(),
            time: "2 hours ago".into(),
            timestamp: None,
        }];
        let text = dashboard_text(&DashboardStats::default(), &activities);
        assert!(text.ends_with("Recent activity:\n  [payment] Fee paid by Ada Lovelace (2 hours ago)"));
    }

    #[test]
    fn student_table_has_a_row_per_student() {
        let ada = student();
        let rendered = students_table(&[&ada]).to_string();
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("Mathematics"));
        assert!(rendered.contains("Active"));
    }

    #[test]
    fn fee_table_uses_resolved_names() {
        let fee = Fee {
            id: Some(4),
            student_id: Some(99),
            fee_type: "Tuition".into(),
            amount: Some(Money::from_cents(25_000)),
            status: FeeStatus::Overdue,
            ..Fee::default()
        };
        let rendered = fees_table(&[&fee], |_| "Unknown Student".to_string()).to_string();
        assert!(rendered.contains("Unknown Student"));
        assert!(rendered.contains("$250.00"));
        assert!(rendered.contains("Overdue"));
    }
}
