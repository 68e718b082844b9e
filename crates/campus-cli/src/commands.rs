//! Command implementations.
//!
//! Each command mounts the store for the matching view, lets it load, then
//! performs the action. Toasts go to the error stream as they are produced.
//! The returned flag is `false` when any action failed or was rejected.

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::info;

use campus_client::{ResourceClient, Transport};
use campus_model::date::parse_date;
use campus_model::{
    FeeStatus, Gender, Inquiry, InquiryReply, InquiryStatus, Money, PaymentRequest, Student,
    StudentStatus,
};
use campus_store::projection::empty_state_message;
use campus_store::{
    ActionOutcome, DashboardStore, FeesStore, InquiriesStore, InquiryForm, StatusFilter,
    StudentForm, StudentsStore, ToastQueue, settle,
};

use crate::cli::{
    Command, FeesCommand, InquiriesCommand, InquiryFields, StudentFields, StudentsCommand,
};
use crate::render;

/// Where a command writes, and how it asks for confirmation.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Answers a yes/no prompt.
    pub confirm: &'a mut dyn FnMut(&str) -> bool,
}

impl Console<'_> {
    fn flush_toasts(&mut self, toasts: &mut ToastQueue) -> Result<()> {
        for toast in toasts.drain() {
            writeln!(self.err, "{toast}")?;
        }
        Ok(())
    }
}

/// Run a data command against `client`. `config` commands are handled by
/// the caller since they never touch the API.
pub async fn run<T: Transport>(
    command: Command,
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<bool> {
    match command {
        Command::Dashboard => dashboard(client, console).await,
        Command::Students(command) => students(command, client, console).await,
        Command::Fees(command) => fees(command, client, console).await,
        Command::Inquiries(command) => inquiries(command, client, console).await,
        Command::Config(_) => bail!("config commands do not use the API"),
    }
}

async fn dashboard<T: Transport>(client: ResourceClient<T>, console: &mut Console<'_>) -> Result<bool> {
    let mut store = DashboardStore::new(client);
    let dispatch = store.mount();
    let outcome = settle(&mut store, dispatch).await;
    console.flush_toasts(store.toasts_mut())?;

    writeln!(
        console.out,
        "{}",
        render::dashboard_text(store.stats(), store.activities())
    )?;
    Ok(succeeded(&outcome))
}

async fn students<T: Transport>(
    command: StudentsCommand,
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<bool> {
    match command {
        StudentsCommand::List(args) => {
            let mut store = StudentsStore::new(client);
            let dispatch = store.mount();
            let outcome = settle(&mut store, dispatch).await;
            console.flush_toasts(store.toasts_mut())?;
            if !succeeded(&outcome) {
                return Ok(false);
            }

            if let Some(term) = args.search {
                store.set_search(term);
            }
            if let Some(filter) = args.status.as_deref().map(StatusFilter::parse) {
                store.set_status_filter(filter);
            }
            let visible = store.visible();
            if visible.is_empty() {
                writeln!(
                    console.out,
                    "{}",
                    empty_state_message("students", store.students().len())
                )?;
            } else {
                writeln!(console.out, "{}", render::students_table(&visible))?;
            }
            Ok(true)
        }
        StudentsCommand::Show { id } => {
            let mut form = StudentForm::edit(client, id);
            let dispatch = form.mount();
            let outcome = settle(&mut form, dispatch).await;
            console.flush_toasts(form.toasts_mut())?;
            if !succeeded(&outcome) {
                return Ok(false);
            }
            writeln!(console.out, "{}", render::student_detail(form.draft()))?;
            Ok(true)
        }
        StudentsCommand::Add(fields) => {
            let mut form = StudentForm::create(client);
            let dispatch = form.mount();
            settle(&mut form, dispatch).await;
            apply_student_fields(form.draft_mut(), fields)?;

            let outcome = form.submit().await;
            console.flush_toasts(form.toasts_mut())?;
            if outcome.is_completed()
                && let Some(id) = form.draft().id
            {
                writeln!(console.out, "{id}")?;
            }
            Ok(succeeded(&outcome))
        }
        StudentsCommand::Edit { id, fields } => {
            let mut form = StudentForm::edit(client, id);
            let dispatch = form.mount();
            let outcome = settle(&mut form, dispatch).await;
            if !succeeded(&outcome) {
                console.flush_toasts(form.toasts_mut())?;
                return Ok(false);
            }
            apply_student_fields(form.draft_mut(), fields)?;

            let outcome = form.submit().await;
            console.flush_toasts(form.toasts_mut())?;
            Ok(succeeded(&outcome))
        }
        StudentsCommand::Delete { id, yes } => {
            let mut store = StudentsStore::new(client);
            let dispatch = store.mount();
            let outcome = settle(&mut store, dispatch).await;
            if !succeeded(&outcome) {
                console.flush_toasts(store.toasts_mut())?;
                return Ok(false);
            }

            let confirm = &mut *console.confirm;
            let outcome = store.delete(id, |prompt| yes || confirm(prompt)).await;
            console.flush_toasts(store.toasts_mut())?;
            report_declined(&outcome, console)?;
            Ok(succeeded(&outcome))
        }
    }
}

async fn fees<T: Transport>(
    command: FeesCommand,
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<bool> {
    let mut store = FeesStore::new(client);
    let dispatch = store.mount();
    let outcome = settle(&mut store, dispatch).await;
    if !succeeded(&outcome) {
        console.flush_toasts(store.toasts_mut())?;
        return Ok(false);
    }

    let outcome = match command {
        FeesCommand::List(args) => {
            if let Some(term) = args.search {
                store.set_search(term);
            }
            if let Some(filter) = args.status.as_deref().map(StatusFilter::parse) {
                store.set_status_filter(filter);
            }
            let visible = store.visible();
            if visible.is_empty() {
                writeln!(
                    console.out,
                    "{}",
                    empty_state_message("fees", store.fees().len())
                )?;
            } else {
                let table = render::fees_table(&visible, |fee| store.student_name(fee));
                writeln!(console.out, "{table}")?;
            }
            writeln!(console.out, "{}", render::fee_summary_text(&store.summary()))?;
            return Ok(true);
        }
        FeesCommand::SetStatus { id, status } => {
            let status: FeeStatus = known_status(&status, FeeStatus::KNOWN)?;
            info!(id, status = status.as_str(), "setting fee status");
            store.set_status(id, status).await
        }
        FeesCommand::Pay { id, amount, method } => {
            let amount: Money = amount
                .parse()
                .with_context(|| format!("invalid payment amount {amount:?}"))?;
            let payment = PaymentRequest {
                amount,
                payment_method: method,
            };
            store.record_payment(id, payment).await
        }
    };
    console.flush_toasts(store.toasts_mut())?;
    Ok(succeeded(&outcome))
}

async fn inquiries<T: Transport>(
    command: InquiriesCommand,
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<bool> {
    let (mut store, outcome) = match command {
        InquiriesCommand::Add(fields) => return add_inquiry(fields, client, console).await,
        InquiriesCommand::List(args) => {
            let Some(mut store) = mounted_inquiries(client, console).await? else {
                return Ok(false);
            };
            if let Some(term) = args.search {
                store.set_search(term);
            }
            if let Some(filter) = args.status.as_deref().map(StatusFilter::parse) {
                store.set_status_filter(filter);
            }
            let visible = store.visible();
            if visible.is_empty() {
                writeln!(
                    console.out,
                    "{}",
                    empty_state_message("inquiries", store.inquiries().len())
                )?;
            } else {
                writeln!(console.out, "{}", render::inquiries_table(&visible))?;
            }
            writeln!(
                console.out,
                "{}",
                render::inquiry_summary_text(&store.summary())
            )?;
            return Ok(true);
        }
        InquiriesCommand::SetStatus { id, status } => {
            let status: InquiryStatus = known_status(&status, InquiryStatus::KNOWN)?;
            let Some(mut store) = mounted_inquiries(client, console).await? else {
                return Ok(false);
            };
            info!(id, status = status.as_str(), "setting inquiry status");
            let outcome = store.set_status(id, status).await;
            (store, outcome)
        }
        InquiriesCommand::Respond { id, text } => {
            let Some(mut store) = mounted_inquiries(client, console).await? else {
                return Ok(false);
            };
            let outcome = store.respond(id, InquiryReply { response: text }).await;
            (store, outcome)
        }
        InquiriesCommand::Delete { id, yes } => {
            let Some(mut store) = mounted_inquiries(client, console).await? else {
                return Ok(false);
            };
            let confirm = &mut *console.confirm;
            let outcome = store.delete(id, |prompt| yes || confirm(prompt)).await;
            report_declined(&outcome, console)?;
            (store, outcome)
        }
    };
    console.flush_toasts(store.toasts_mut())?;
    Ok(succeeded(&outcome))
}

/// Load the inquiry list. `None` when the load failed; its toast has been
/// printed.
async fn mounted_inquiries<T: Transport>(
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<Option<InquiriesStore<T>>> {
    let mut store = InquiriesStore::new(client);
    let dispatch = store.mount();
    let outcome = settle(&mut store, dispatch).await;
    if succeeded(&outcome) {
        Ok(Some(store))
    } else {
        console.flush_toasts(store.toasts_mut())?;
        Ok(None)
    }
}

async fn add_inquiry<T: Transport>(
    fields: InquiryFields,
    client: ResourceClient<T>,
    console: &mut Console<'_>,
) -> Result<bool> {
    let mut form = InquiryForm::create(client);
    let dispatch = form.mount();
    settle(&mut form, dispatch).await;
    apply_inquiry_fields(form.draft_mut(), fields);

    let outcome = form.submit().await;
    console.flush_toasts(form.toasts_mut())?;
    if outcome.is_completed()
        && let Some(id) = form.draft().id
    {
        writeln!(console.out, "{id}")?;
    }
    Ok(succeeded(&outcome))
}

/// Completed or declined. Refusals, failures and not-ready stores count as
/// failures for the exit code.
fn succeeded(outcome: &ActionOutcome) -> bool {
    !outcome.is_failure() && !matches!(outcome, ActionOutcome::NotReady)
}

fn report_declined(outcome: &ActionOutcome, console: &mut Console<'_>) -> Result<()> {
    if matches!(outcome, ActionOutcome::Declined) {
        writeln!(console.err, "Cancelled.")?;
    }
    Ok(())
}

/// Parse a status argument, refusing values the API does not know.
fn known_status<S>(raw: &str, known: &[S]) -> Result<S>
where
    S: AsRef<str> + Clone,
{
    known
        .iter()
        .find(|status| status.as_ref().eq_ignore_ascii_case(raw.trim()))
        .cloned()
        .with_context(|| {
            let accepted: Vec<&str> = known.iter().map(S::as_ref).collect();
            format!("unknown status {raw:?}; expected one of {}", accepted.join(", "))
        })
}

/// Copy the given fields onto a draft. Unset fields keep their value.
fn apply_student_fields(draft: &mut Student, fields: StudentFields) -> Result<()> {
    let StudentFields {
        first_name,
        last_name,
        email,
        phone,
        address,
        date_of_birth,
        gender,
        course,
        status,
    } = fields;

    if let Some(value) = first_name {
        draft.first_name = value;
    }
    if let Some(value) = last_name {
        draft.last_name = value;
    }
    if let Some(value) = email {
        draft.email = value;
    }
    if let Some(value) = phone {
        draft.phone = value;
    }
    if let Some(value) = address {
        draft.address = value;
    }
    if let Some(value) = date_of_birth {
        let date = parse_date(&value).with_context(|| format!("invalid date of birth {value:?}"))?;
        draft.date_of_birth = Some(date);
    }
    if let Some(value) = gender {
        draft.gender = Some(value.parse::<Gender>()?);
    }
    if let Some(value) = course {
        draft.course = value;
    }
    if let Some(value) = status {
        draft.status = known_status(&value, StudentStatus::KNOWN)?;
    }
    Ok(())
}

fn apply_inquiry_fields(draft: &mut Inquiry, fields: InquiryFields) {
    let InquiryFields {
        name,
        email,
        phone,
        subject,
        message,
    } = fields;

    if let Some(value) = name {
        draft.name = value;
    }
    if let Some(value) = email {
        draft.email = value;
    }
    if phone.is_some() {
        draft.phone_number = phone;
    }
    if let Some(value) = subject {
        draft.subject = value;
    }
    if let Some(value) = message {
        draft.message = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_is_case_insensitive() {
        let status: InquiryStatus = known_status("in_progress", InquiryStatus::KNOWN).unwrap();
        assert_eq!(status, InquiryStatus::InProgress);
    }

    #[test]
    fn unknown_status_lists_the_choices() {
        let error = known_status::<FeeStatus>("Waived", FeeStatus::KNOWN).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown status \"Waived\"; expected one of Paid, Pending, Overdue"
        );
    }

    #[test]
    fn edit_fields_only_touch_what_was_given() {
        let mut draft = Student {
            first_name: "Ada".into(),
            email: "ada@example.edu".into(),
            ..Student::default()
        };
        let fields = StudentFields {
            email: Some("ada@math.example.edu".into()),
            gender: Some("f".into()),
            ..StudentFields::default()
        };
        apply_student_fields(&mut draft, fields).unwrap();

        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.email, "ada@math.example.edu");
        assert_eq!(draft.gender, Some(Gender::Female));
    }

    #[test]
    fn bad_date_of_birth_is_an_error() {
        let fields = StudentFields {
            date_of_birth: Some("10/12/2004".into()),
            ..StudentFields::default()
        };
        assert!(apply_student_fields(&mut Student::default(), fields).is_err());
    }
}
