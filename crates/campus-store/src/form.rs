//! Add/edit forms for a single record.
//!
//! A form works on a draft of the record. Submission checks required fields
//! first; a rejected draft never reaches the network. A successful save
//! points navigation back at the owning list.

use campus_client::{HttpTransport, ResourceClient, Transport};
use campus_model::{Fee, Inquiry, RecordId, Resource, Student, Validate, title_label};

use crate::dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
use crate::error::StoreError;
use crate::lifecycle::{LoadState, Stamped, ViewLifecycle};
use crate::navigation::Route;
use crate::toast::ToastQueue;

/// A resource with an add/edit form.
pub trait FormResource: Resource + Default {
    /// Past tense used after a create (`Student added successfully`).
    const CREATED: &'static str = "added";

    /// Verb used when a create fails (`Failed to add student`).
    const CREATE_ACTION: &'static str = "add";

    /// Where a saved form returns to.
    fn list_route() -> Route;
}

impl FormResource for Student {
    fn list_route() -> Route {
        Route::Students
    }
}

impl FormResource for Inquiry {
    const CREATED: &'static str = "submitted";
    const CREATE_ACTION: &'static str = "submit";

    fn list_route() -> Route {
        Route::Inquiries
    }
}

impl FormResource for Fee {
    fn list_route() -> Route {
        Route::Fees
    }
}

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone)]
pub enum FormMessage<R> {
    /// The record being edited arrived.
    Loaded(campus_client::Result<R>),
    /// A create or update finished.
    Saved(campus_client::Result<R>),
}

#[derive(Debug)]
pub struct FormStore<R, T = HttpTransport> {
    client: ResourceClient<T>,
    lifecycle: ViewLifecycle,
    mode: FormMode,
    draft: R,
    state: LoadState,
    submitting: bool,
    error: Option<StoreError>,
    navigate_to: Option<Route>,
    toasts: ToastQueue,
}

pub type StudentForm<T = HttpTransport> = FormStore<Student, T>;
pub type InquiryForm<T = HttpTransport> = FormStore<Inquiry, T>;
pub type FeeForm<T = HttpTransport> = FormStore<Fee, T>;

impl<R: FormResource, T: Transport> FormStore<R, T> {
    pub fn new(client: ResourceClient<T>, mode: FormMode) -> Self {
        Self {
            client,
            lifecycle: ViewLifecycle::new(),
            mode,
            draft: R::default(),
            state: LoadState::Idle,
            submitting: false,
            error: None,
            navigate_to: None,
            toasts: ToastQueue::new(),
        }
    }

    pub fn create(client: ResourceClient<T>) -> Self {
        Self::new(client, FormMode::Create)
    }

    pub fn edit(client: ResourceClient<T>, id: RecordId) -> Self {
        Self::new(client, FormMode::Edit(id))
    }

    /// Open the form. A create form is ready at once with an empty draft;
    /// an edit form loads its record.
    pub fn mount(&mut self) -> Dispatch<FormMessage<R>> {
        self.lifecycle.mount();
        self.draft = R::default();
        self.navigate_to = None;
        self.submitting = false;
        match self.mode {
            FormMode::Create => {
                self.state = LoadState::Ready;
                Dispatch::Resolved(ActionOutcome::Completed)
            }
            FormMode::Edit(_) => self.begin_load(),
        }
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    /// Fetch the record being edited. Create forms have nothing to load.
    pub fn begin_load(&mut self) -> Dispatch<FormMessage<R>> {
        if !self.lifecycle.is_mounted() {
            return Dispatch::Resolved(ActionOutcome::Discarded);
        }
        let FormMode::Edit(id) = self.mode else {
            return Dispatch::Resolved(ActionOutcome::Completed);
        };
        self.state = LoadState::Loading;
        self.error = None;

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            FormMessage::Loaded(client.get::<R>(id).await)
        })
    }

    /// Validate the draft and send it.
    pub fn begin_submit(&mut self) -> Dispatch<FormMessage<R>> {
        if !self.state.is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }
        if let Err(error) = self.draft.validate() {
            let error = self.toasts.reject(error);
            self.error = Some(error.clone());
            return Dispatch::Resolved(ActionOutcome::Rejected(error));
        }
        self.submitting = true;
        self.error = None;

        let client = self.client.clone();
        let draft = self.draft.clone();
        let mode = self.mode;
        Dispatch::request(self.lifecycle.generation(), async move {
            let result = match mode {
                FormMode::Create => client.create(&draft).await,
                FormMode::Edit(id) => client.update(id, &draft).await,
            };
            FormMessage::Saved(result)
        })
    }

    pub async fn load(&mut self) -> ActionOutcome {
        let dispatch = self.begin_load();
        settle(self, dispatch).await
    }

    pub async fn submit(&mut self) -> ActionOutcome {
        let dispatch = self.begin_submit();
        settle(self, dispatch).await
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: R) {
        self.draft = draft;
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    /// Where the view should go next, if anywhere.
    pub fn navigate_to(&self) -> Option<Route> {
        self.navigate_to
    }

    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigate_to.take()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    fn failure_fallback(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Failed to {} {}", R::CREATE_ACTION, R::LABEL),
            FormMode::Edit(_) => format!("Failed to update {}", R::LABEL),
        }
    }

    fn success_message(&self) -> String {
        let verb = match self.mode {
            FormMode::Create => R::CREATED,
            FormMode::Edit(_) => "updated",
        };
        format!("{} {verb} successfully", title_label(R::LABEL))
    }
}

impl<R: FormResource, T: Transport> ViewStore for FormStore<R, T> {
    type Message = FormMessage<R>;

    fn apply(&mut self, message: Stamped<FormMessage<R>>) -> ActionOutcome {
        let Some(message) = self.lifecycle.accept(message) else {
            tracing::debug!(resource = R::LABEL, "discarding form result for a retired view");
            return ActionOutcome::Discarded;
        };

        match message {
            FormMessage::Loaded(Ok(record)) => {
                self.draft = record;
                self.state = LoadState::Ready;
                ActionOutcome::Completed
            }
            FormMessage::Loaded(Err(error)) => {
                let fallback = format!("Failed to fetch {} details", R::LABEL);
                let error = self.toasts.report(error, &fallback);
                self.state = LoadState::Errored;
                self.error = Some(error.clone());
                self.navigate_to = Some(R::list_route());
                ActionOutcome::Failed(error)
            }
            FormMessage::Saved(Ok(record)) => {
                self.submitting = false;
                self.draft = record;
                let message = self.success_message();
                self.toasts.success(message);
                self.navigate_to = Some(R::list_route());
                ActionOutcome::Completed
            }
            FormMessage::Saved(Err(error)) => {
                self.submitting = false;
                let fallback = self.failure_fallback();
                let error = self.toasts.report(error, &fallback);
                self.error = Some(error.clone());
                ActionOutcome::Failed(error)
            }
        }
    }
}
