//! Fee list view.
//!
//! Fees are shown against student names, so the view loads both
//! collections together and treats a failure of either as a failed load.

use campus_client::{HttpTransport, ResourceClient, Transport};
use campus_model::{Fee, FeeStatus, PaymentRequest, RecordId, Student, Validate};
use futures_util::future;

use crate::collection::Collection;
use crate::dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
use crate::error::StoreError;
use crate::lifecycle::{LoadState, Stamped, ViewLifecycle};
use crate::projection::{FeeSummary, StatusFilter, fee_summary, filter_fees, student_name};
use crate::toast::ToastQueue;

/// Results of fee view requests.
#[derive(Debug, Clone)]
pub enum FeesMessage {
    Loaded {
        fees: campus_client::Result<Vec<Fee>>,
        students: campus_client::Result<Vec<Student>>,
    },
    StatusSet {
        id: RecordId,
        status: FeeStatus,
        result: campus_client::Result<()>,
    },
    PaymentRecorded {
        id: RecordId,
        result: campus_client::Result<Fee>,
    },
}

#[derive(Debug)]
pub struct FeesStore<T = HttpTransport> {
    client: ResourceClient<T>,
    lifecycle: ViewLifecycle,
    fees: Collection<Fee>,
    students: Collection<Student>,
    search: String,
    status_filter: StatusFilter,
    toasts: ToastQueue,
}

impl<T: Transport> FeesStore<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            lifecycle: ViewLifecycle::new(),
            fees: Collection::default(),
            students: Collection::default(),
            search: String::new(),
            status_filter: StatusFilter::All,
            toasts: ToastQueue::new(),
        }
    }

    pub fn mount(&mut self) -> Dispatch<FeesMessage> {
        self.lifecycle.mount();
        self.fees.reset();
        self.students.reset();
        self.begin_load()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    /// Fetch fees and students concurrently.
    pub fn begin_load(&mut self) -> Dispatch<FeesMessage> {
        if !self.lifecycle.is_mounted() {
            return Dispatch::Resolved(ActionOutcome::Discarded);
        }
        self.fees.begin_loading();
        self.students.begin_loading();

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            let (fees, students) = future::join(client.list_fees(), client.list_students()).await;
            FeesMessage::Loaded { fees, students }
        })
    }

    /// Change one fee's status. On success only that fee's status is
    /// patched; the list is not refetched.
    pub fn begin_set_status(&mut self, id: RecordId, status: FeeStatus) -> Dispatch<FeesMessage> {
        if !self.fees.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            let result = client.update_fee_status(id, &status).await;
            FeesMessage::StatusSet { id, status, result }
        })
    }

    /// Record a payment against a fee. The server's updated fee replaces the
    /// local copy.
    pub fn begin_record_payment(
        &mut self,
        id: RecordId,
        payment: PaymentRequest,
    ) -> Dispatch<FeesMessage> {
        if !self.fees.state().is_ready() {
            return Dispatch::Resolved(ActionOutcome::NotReady);
        }
        if let Err(error) = payment.validate() {
            return Dispatch::Resolved(ActionOutcome::Rejected(self.toasts.reject(error)));
        }

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            FeesMessage::PaymentRecorded {
                id,
                result: client.process_payment(id, &payment).await,
            }
        })
    }

    pub async fn load(&mut self) -> ActionOutcome {
        let dispatch = self.begin_load();
        settle(self, dispatch).await
    }

    pub async fn set_status(&mut self, id: RecordId, status: FeeStatus) -> ActionOutcome {
        let dispatch = self.begin_set_status(id, status);
        settle(self, dispatch).await
    }

    pub async fn record_payment(&mut self, id: RecordId, payment: PaymentRequest) -> ActionOutcome {
        let dispatch = self.begin_record_payment(id, payment);
        settle(self, dispatch).await
    }

    pub fn fees(&self) -> &[Fee] {
        self.fees.records()
    }

    pub fn students(&self) -> &[Student] {
        self.students.records()
    }

    pub fn state(&self) -> LoadState {
        self.fees.state()
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.fees.error()
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

    /// Fees passing the search (student name or fee type) and status filter.
    pub fn visible(&self) -> Vec<&Fee> {
        filter_fees(
            self.fees.records(),
            self.students.records(),
            &self.search,
            &self.status_filter,
        )
    }

    /// Totals over every loaded fee, ignoring filters.
    pub fn summary(&self) -> FeeSummary {
        fee_summary(self.fees.records())
    }

    /// Display name of the student a fee belongs to.
    pub fn student_name(&self, fee: &Fee) -> String {
        student_name(self.students.records(), fee.student_id)
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }
}

impl<T: Transport> ViewStore for FeesStore<T> {
    type Message = FeesMessage;

    fn apply(&mut self, message: Stamped<FeesMessage>) -> ActionOutcome {
        let Some(message) = self.lifecycle.accept(message) else {
            tracing::debug!("discarding fees result for a retired view");
            return ActionOutcome::Discarded;
        };

        match message {
            FeesMessage::Loaded {
                fees: Ok(fees),
                students: Ok(students),
            } => {
                tracing::debug!(fees = fees.len(), students = students.len(), "fees loaded");
                self.fees.loaded(fees);
                self.students.loaded(students);
                ActionOutcome::Completed
            }
            FeesMessage::Loaded {
                fees: Err(error),
                ..
            }
            | FeesMessage::Loaded {
                students: Err(error),
                ..
            } => {
                let error = self.toasts.report(error, "Failed to fetch fees data");
                self.fees.failed(error.clone());
                self.students.failed(error.clone());
                ActionOutcome::Failed(error)
            }
            FeesMessage::StatusSet {
                id,
                status,
                result: Ok(()),
            } => {
                if !self.fees.set_status(id, &status) {
                    tracing::debug!(id, "status updated for a fee no longer listed");
                }
                self.toasts.success("Fee status updated successfully");
                ActionOutcome::Completed
            }
            FeesMessage::StatusSet { result: Err(error), .. } => {
                ActionOutcome::Failed(self.toasts.report(error, "Failed to update fee status"))
            }
            FeesMessage::PaymentRecorded { id, result: Ok(mut fee) } => {
                fee.id.get_or_insert(id);
                self.fees.replace(fee);
                self.toasts.success("Payment recorded successfully");
                ActionOutcome::Completed
            }
            FeesMessage::PaymentRecorded { result: Err(error), .. } => {
                ActionOutcome::Failed(self.toasts.report(error, "Failed to process payment"))
            }
        }
    }
}
