//! Inquiry list view.

use campus_client::{HttpTransport, ResourceClient, Transport};
use campus_model::{Inquiry, InquiryReply, InquiryStatus, RecordId, Validate};

use crate::collection::Collection;
use crate::dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
use crate::error::StoreError;
use crate::lifecycle::{LoadState, Stamped, ViewLifecycle};
use crate::projection::{InquirySummary, StatusFilter, filter_records, inquiry_summary};
use crate::toast::ToastQueue;

/// Results of inquiry view requests.
#[derive(Debug, Clone)]
pub enum InquiriesMessage {
    Loaded(campus_client::Result<Vec<Inquiry>>),
    StatusSet {
        id: RecordId,
        status: InquiryStatus,
        result: campus_client::Result<()>,
    },
    Deleted {
        id: RecordId,
        result: campus_client::Result<()>,
    },
    Responded {
        id: RecordId,
        result: campus_client::Result<Inquiry>,
    },
}

#[derive(Debug)]
pub struct InquiriesStore<T = HttpTransport> {
    client: ResourceClient<T>,
    lifecycle: ViewLifecycle,
    inquiries: Collection<Inquiry>,
    search: String,
    status_filter: StatusFilter,
    toasts: ToastQueue,
}

impl<T: Transport> InquiriesStore<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            lifecycle: ViewLifecycle::new(),
            inquiries: Collection::default(),
            search: String::new(),
            status_filter: StatusFilter::All,
            toasts: ToastQueue::new(),
        }
    }

    pub fn mount(&mut self) -> Dispatch<InquiriesMessage> {
        self.lifecycle.mount();
        self.inquiries.reset();
        self.begin_load()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn begin_load(&mut self) -> Dispatch<InquiriesMessage> {
        if !self.lifecycle.is_mounted() {
            return Dispatch::Resolved(ActionOutcome::Discarded);
        }
        self.inquiries.begin_loading();

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            InquiriesMessage::Loaded(client.list_inquiries().await)
        })
    }

    pub fn begin_set_status(
        &mut self,
        id: RecordId,
        status: InquiryStatus,
    ) -> Dispatch<InquiriesMessage> {
        if !self.inquiries.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            let result = client.update_inquiry_status(id, &status).await;
            InquiriesMessage::StatusSet { id, status, result }
        })
    }

    pub fn begin_delete(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Dispatch<InquiriesMessage> {
        if !self.inquiries.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }
        if !confirm("Are you sure you want to delete this inquiry?") {
            return Dispatch::Resolved(ActionOutcome::Declined);
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            InquiriesMessage::Deleted {
                id,
                result: client.delete_inquiry(id).await,
            }
        })
    }

    /// Send a reply. The server's updated inquiry replaces the local copy.
    pub fn begin_respond(&mut self, id: RecordId, reply: InquiryReply) -> Dispatch<InquiriesMessage> {
        if !self.inquiries.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }
        if let Err(error) = reply.validate() {
            return Dispatch::Resolved(ActionOutcome::Rejected(self.toasts.reject(error)));
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            InquiriesMessage::Responded {
                id,
                result: client.respond_to_inquiry(id, &reply).await,
            }
        })
    }

    pub async fn load(&mut self) -> ActionOutcome {
        let dispatch = self.begin_load();
        settle(self, dispatch).await
    }

    pub async fn set_status(&mut self, id: RecordId, status: InquiryStatus) -> ActionOutcome {
        let dispatch = self.begin_set_status(id, status);
        settle(self, dispatch).await
    }

    pub async fn delete(&mut self, id: RecordId, confirm: impl FnOnce(&str) -> bool) -> ActionOutcome {
        let dispatch = self.begin_delete(id, confirm);
        settle(self, dispatch).await
    }

    pub async fn respond(&mut self, id: RecordId, reply: InquiryReply) -> ActionOutcome {
        let dispatch = self.begin_respond(id, reply);
        settle(self, dispatch).await
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        self.inquiries.records()
    }

    pub fn find(&self, id: RecordId) -> Option<&Inquiry> {
        self.inquiries.find(id)
    }

    pub fn state(&self) -> LoadState {
        self.inquiries.state()
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.inquiries.error()
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

    /// Inquiries passing the search (name, email, subject) and status filter.
    pub fn visible(&self) -> Vec<&Inquiry> {
        filter_records(self.inquiries.records(), &self.search, &self.status_filter)
    }

    /// Counts over every loaded inquiry, ignoring filters.
    pub fn summary(&self) -> InquirySummary {
        inquiry_summary(self.inquiries.records())
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }
}

impl<T: Transport> ViewStore for InquiriesStore<T> {
    type Message = InquiriesMessage;

    fn apply(&mut self, message: Stamped<InquiriesMessage>) -> ActionOutcome {
        let Some(message) = self.lifecycle.accept(message) else {
            tracing::debug!("discarding inquiries result for a retired view");
            return ActionOutcome::Discarded;
        };

        match message {
            InquiriesMessage::Loaded(Ok(inquiries)) => {
                tracing::debug!(count = inquiries.len(), "inquiries loaded");
                self.inquiries.loaded(inquiries);
                ActionOutcome::Completed
            }
            InquiriesMessage::Loaded(Err(error)) => {
                let error = self.toasts.report(error, "Failed to fetch inquiries");
                self.inquiries.failed(error.clone());
                ActionOutcome::Failed(error)
            }
            InquiriesMessage::StatusSet {
                id,
                status,
                result: Ok(()),
            } => {
                self.inquiries.set_status(id, &status);
                self.toasts.success("Inquiry status updated successfully");
                ActionOutcome::Completed
            }
            InquiriesMessage::StatusSet { result: Err(error), .. } => ActionOutcome::Failed(
                self.toasts.report(error, "Failed to update inquiry status"),
            ),
            InquiriesMessage::Deleted { id, result: Ok(()) } => {
                self.inquiries.remove(id);
                self.toasts.success("Inquiry deleted successfully");
                ActionOutcome::Completed
            }
            InquiriesMessage::Deleted { result: Err(error), .. } => {
                ActionOutcome::Failed(self.toasts.report(error, "Failed to delete inquiry"))
            }
            InquiriesMessage::Responded {
                id,
                result: Ok(mut inquiry),
            } => {
                inquiry.id.get_or_insert(id);
                self.inquiries.replace(inquiry);
                self.toasts.success("Response sent successfully");
                ActionOutcome::Completed
            }
            InquiriesMessage::Responded { result: Err(error), .. } => {
                ActionOutcome::Failed(self.toasts.report(error, "Failed to send response"))
            }
        }
    }
}
