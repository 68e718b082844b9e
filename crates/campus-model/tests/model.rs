//! Tests for campus-model record types.

use campus_model::{
    Activity, ActivityKind, DashboardStats, Fee, FeeStatus, Gender, Inquiry, InquiryStatus, Money,
    PaymentRequest, Student, StudentStatus, Validate, ValidationError,
};
use chrono::NaiveDate;

fn complete_student() -> Student {
    Student {
        id: None,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.edu".to_string(),
        phone: "5551234567".to_string(),
        address: "12 Analytical Row".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2001, 12, 10),
        gender: Some(Gender::Female),
        course: "Mathematics".to_string(),
        status: StudentStatus::Active,
        enrollment_date: None,
    }
}

#[test]
fn student_decodes_server_payload() {
    let json = r#"{
        "id": 4,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.edu",
        "phone": "5551234567",
        "address": "12 Analytical Row",
        "dateOfBirth": "2001-12-10",
        "gender": "Female",
        "course": "Mathematics",
        "status": "Active",
        "enrollmentDate": "2024-01-15T10:30:00"
    }"#;
    let student: Student = serde_json::from_str(json).expect("decode student");
    assert_eq!(student.id, Some(4));
    assert_eq!(student.full_name(), "Ada Lovelace");
    assert_eq!(student.date_of_birth, NaiveDate::from_ymd_opt(2001, 12, 10));
    assert!(student.enrollment_date.is_some());
}

#[test]
fn student_accepts_phone_number_alias() {
    let json = r#"{"id": 1, "firstName": "A", "lastName": "B", "phoneNumber": "555"}"#;
    let student: Student = serde_json::from_str(json).expect("decode student");
    assert_eq!(student.phone, "555");
}

#[test]
fn new_student_omits_server_fields() {
    let json = serde_json::to_value(complete_student()).expect("encode student");
    assert!(json.get("id").is_none());
    assert!(json.get("enrollmentDate").is_none());
    assert_eq!(json["dateOfBirth"], "2001-12-10");
    assert_eq!(json["gender"], "Female");
}

#[test]
fn complete_student_passes_validation() {
    assert_eq!(complete_student().validate(), Ok(()));
}

#[test]
fn missing_email_is_reported_by_name() {
    let student = Student {
        email: String::new(),
        ..complete_student()
    };
    assert_eq!(
        student.validate(),
        Err(ValidationError::MissingField { field: "email" })
    );
}

#[test]
fn first_missing_field_wins() {
    let student = Student {
        last_name: " ".to_string(),
        course: String::new(),
        ..complete_student()
    };
    assert_eq!(student.validate().unwrap_err().field(), "lastName");

    let student = Student {
        gender: None,
        address: String::new(),
        ..complete_student()
    };
    assert_eq!(student.validate().unwrap_err().field(), "gender");
}

#[test]
fn fee_tolerates_unknown_status_and_datetime_due_date() {
    let json = r#"{
        "id": 9,
        "studentId": 4,
        "feeType": "Tuition",
        "amount": 1200.5,
        "status": "Partially Paid",
        "dueDate": "2024-06-30T00:00:00"
    }"#;
    let fee: Fee = serde_json::from_str(json).expect("decode fee");
    assert_eq!(fee.amount, Some(Money::from_cents(120_050)));
    assert_eq!(fee.status, FeeStatus::Other("Partially Paid".to_string()));
    assert_eq!(fee.due_date, NaiveDate::from_ymd_opt(2024, 6, 30));
}

#[test]
fn fee_without_student_is_unassigned() {
    let fee: Fee =
        serde_json::from_str(r#"{"id": 2, "feeType": "Library", "amount": 25}"#).expect("decode");
    assert_eq!(fee.student_id, None);
    assert_eq!(fee.status, FeeStatus::Pending);
}

#[test]
fn negative_fee_amount_is_invalid() {
    let fee = Fee {
        student_id: Some(1),
        fee_type: "Tuition".to_string(),
        amount: Some(Money::from_cents(-100)),
        due_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        ..Fee::default()
    };
    let err = fee.validate().unwrap_err();
    assert_eq!(err.field(), "amount");
    assert!(matches!(err, ValidationError::InvalidField { .. }));
}

#[test]
fn zero_fee_amount_is_allowed() {
    let fee = Fee {
        student_id: Some(1),
        fee_type: "Waived".to_string(),
        amount: Some(Money::ZERO),
        due_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        ..Fee::default()
    };
    assert_eq!(fee.validate(), Ok(()));
}

#[test]
fn fee_without_amount_is_missing_it() {
    let fee: Fee =
        serde_json::from_str(r#"{"studentId": 1, "feeType": "Tuition", "dueDate": "2025-01-31"}"#)
            .expect("decode");
    assert_eq!(fee.amount, None);
    assert_eq!(
        fee.validate(),
        Err(ValidationError::MissingField { field: "amount" })
    );
    assert_eq!(fee.amount_or_zero(), Money::ZERO);
}

#[test]
fn payment_requires_positive_amount_and_method() {
    let payment = PaymentRequest {
        amount: Money::ZERO,
        payment_method: "Card".to_string(),
    };
    assert_eq!(payment.validate().unwrap_err().field(), "amount");

    let payment = PaymentRequest {
        amount: Money::from_cents(500),
        payment_method: String::new(),
    };
    assert_eq!(payment.validate().unwrap_err().field(), "paymentMethod");
}

#[test]
fn inquiry_reads_backend_field_names() {
    let json = r#"{
        "id": 7,
        "name": "Grace",
        "email": "grace@example.com",
        "phone": "5550001111",
        "subject": "Admissions",
        "message": "When does term start?",
        "status": "IN_PROGRESS",
        "createdDate": "2024-02-01T09:00:00.000"
    }"#;
    let inquiry: Inquiry = serde_json::from_str(json).expect("decode inquiry");
    assert_eq!(inquiry.phone_number.as_deref(), Some("5550001111"));
    assert_eq!(inquiry.status, InquiryStatus::InProgress);
    assert!(inquiry.inquiry_date.is_some());
}

#[test]
fn inquiry_phone_is_optional() {
    let inquiry = Inquiry {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Fees".to_string(),
        message: "Is there a payment plan?".to_string(),
        ..Inquiry::default()
    };
    assert_eq!(inquiry.validate(), Ok(()));

    let inquiry = Inquiry {
        message: String::new(),
        ..inquiry
    };
    assert_eq!(inquiry.validate().unwrap_err().field(), "message");
}

#[test]
fn dashboard_stats_default_missing_fields() {
    let stats: DashboardStats =
        serde_json::from_str(r#"{"totalStudents": 12}"#).expect("decode stats");
    assert_eq!(stats.total_students, 12);
    assert_eq!(stats.fees_collected, Money::ZERO);
    assert!(!stats.is_zeroed());
    assert!(DashboardStats::default().is_zeroed());
}

#[test]
fn activity_reads_type_field() {
    let activity: Activity = serde_json::from_str(
        r#"{"type": "payment", "message": "Fee paid", "time": "1 hour ago"}"#,
    )
    .expect("decode activity");
    assert_eq!(activity.kind, ActivityKind::Payment);
    assert_eq!(activity.time, "1 hour ago");
}
