//! Student list view.

use campus_client::{HttpTransport, ResourceClient, Transport};
use campus_model::{RecordId, Student};

use crate::collection::Collection;
use crate::dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
use crate::error::StoreError;
use crate::lifecycle::{LoadState, Stamped, ViewLifecycle};
use crate::projection::{StatusFilter, filter_records};
use crate::toast::ToastQueue;

/// Results of student list requests.
#[derive(Debug, Clone)]
pub enum StudentsMessage {
    Loaded(campus_client::Result<Vec<Student>>),
    Deleted {
        id: RecordId,
        result: campus_client::Result<()>,
    },
}

/// State behind the student list: records, filters and notifications.
#[derive(Debug)]
pub struct StudentsStore<T = HttpTransport> {
    client: ResourceClient<T>,
    lifecycle: ViewLifecycle,
    students: Collection<Student>,
    search: String,
    status_filter: StatusFilter,
    toasts: ToastQueue,
}

impl<T: Transport> StudentsStore<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            lifecycle: ViewLifecycle::new(),
            students: Collection::default(),
            search: String::new(),
            status_filter: StatusFilter::All,
            toasts: ToastQueue::new(),
        }
    }

    /// Enter the view: drop anything from a previous visit and load afresh.
    pub fn mount(&mut self) -> Dispatch<StudentsMessage> {
        self.lifecycle.mount();
        self.students.reset();
        self.begin_load()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn begin_load(&mut self) -> Dispatch<StudentsMessage> {
        if !self.lifecycle.is_mounted() {
            return Dispatch::Resolved(ActionOutcome::Discarded);
        }
        self.students.begin_loading();

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            StudentsMessage::Loaded(client.list_students().await)
        })
    }

    /// Delete after confirmation. `confirm` receives the prompt text;
    /// returning `false` cancels with no request.
    pub fn begin_delete(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Dispatch<StudentsMessage> {
        if !self.students.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }
        if !confirm("Are you sure you want to delete this student?") {
            return Dispatch::Resolved(ActionOutcome::Declined);
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            StudentsMessage::Deleted {
                id,
                result: client.delete_student(id).await,
            }
        })
    }

    pub async fn load(&mut self) -> ActionOutcome {
        let dispatch = self.begin_load();
        settle(self, dispatch).await
    }

    pub async fn delete(&mut self, id: RecordId, confirm: impl FnOnce(&str) -> bool) -> ActionOutcome {
        let dispatch = self.begin_delete(id, confirm);
        settle(self, dispatch).await
    }

    pub fn students(&self) -> &[Student] {
        self.students.records()
    }

    pub fn state(&self) -> LoadState {
        self.students.state()
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.students.error()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Students passing the current search and status filter.
    pub fn visible(&self) -> Vec<&Student> {
        filter_records(self.students.records(), &self.search, &self.status_filter)
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }
}

impl<T: Transport> ViewStore for StudentsStore<T> {
    type Message = StudentsMessage;

    fn apply(&mut self, message: Stamped<StudentsMessage>) -> ActionOutcome {
        let Some(message) = self.lifecycle.accept(message) else {
            tracing::debug!("discarding students result for a retired view");
            return ActionOutcome::Discarded;
        };

        match message {
            StudentsMessage::Loaded(Ok(students)) => {
                tracing::debug!(count = students.len(), "students loaded");
                self.students.loaded(students);
                ActionOutcome::Completed
            }
            StudentsMessage::Loaded(Err(error)) => {
                let error = self.toasts.report(error, "Failed to fetch students");
                self.students.failed(error.clone());
                ActionOutcome::Failed(error)
            }
            StudentsMessage::Deleted { id, result: Ok(()) } => {
                self.students.remove(id);
                self.toasts.success("Student deleted successfully");
                ActionOutcome::Completed
            }
            StudentsMessage::Deleted { result: Err(error), .. } => {
                ActionOutcome::Failed(self.toasts.report(error, "Failed to delete student"))
            }
        }
    }
}
