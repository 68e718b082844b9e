//! Dashboard view: headline stats and the recent activity feed.

use campus_client::{HttpTransport, ResourceClient, Transport};
use campus_model::{Activity, DashboardStats};
use futures_util::future;

use crate::dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
use crate::error::StoreError;
use crate::lifecycle::{LoadState, Stamped, ViewLifecycle};
use crate::toast::ToastQueue;

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Loaded {
        stats: campus_client::Result<DashboardStats>,
        activities: campus_client::Result<Vec<Activity>>,
    },
}

/// Dashboard state. Stats are never absent: a failed load shows zeros.
#[derive(Debug)]
pub struct DashboardStore<T = HttpTransport> {
    client: ResourceClient<T>,
    lifecycle: ViewLifecycle,
    stats: DashboardStats,
    activities: Vec<Activity>,
    state: LoadState,
    error: Option<StoreError>,
    toasts: ToastQueue,
}

impl<T: Transport> DashboardStore<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            lifecycle: ViewLifecycle::new(),
            stats: DashboardStats::default(),
            activities: Vec::new(),
            state: LoadState::Idle,
            error: None,
            toasts: ToastQueue::new(),
        }
    }

    pub fn mount(&mut self) -> Dispatch<DashboardMessage> {
        self.lifecycle.mount();
        self.stats = DashboardStats::default();
        self.activities.clear();
        self.begin_load()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    /// Fetch stats and activities concurrently.
    pub fn begin_load(&mut self) -> Dispatch<DashboardMessage> {
        if !self.lifecycle.is_mounted() {
            return Dispatch::Resolved(ActionOutcome::Discarded);
        }
        self.state = LoadState::Loading;
        self.error = None;

        let client = self.client.clone();
        Dispatch::request(self.lifecycle.generation(), async move {
            let (stats, activities) =
                future::join(client.dashboard_stats(), client.recent_activities()).await;
            DashboardMessage::Loaded { stats, activities }
        })
    }

    pub async fn load(&mut self) -> ActionOutcome {
        let dispatch = self.begin_load();
        settle(self, dispatch).await
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }
}

impl<T: Transport> ViewStore for DashboardStore<T> {
    type Message = DashboardMessage;

    fn apply(&mut self, message: Stamped<DashboardMessage>) -> ActionOutcome {
        let Some(DashboardMessage::Loaded { stats, activities }) = self.lifecycle.accept(message)
        else {
            tracing::debug!("discarding dashboard result for a retired view");
            return ActionOutcome::Discarded;
        };

        match (stats, activities) {
            (Ok(stats), Ok(activities)) => {
                tracing::debug!(activities = activities.len(), "dashboard loaded");
                self.stats = stats;
                self.activities = activities;
                self.state = LoadState::Ready;
                ActionOutcome::Completed
            }
            (Err(error), _) | (_, Err(error)) => {
                let error = self.toasts.report(error, "Failed to load dashboard data");
                self.stats = DashboardStats::default();
                self.activities.clear();
                self.state = LoadState::Errored;
                self.error = Some(error.clone());
                ActionOutcome::Failed(error)
            }
        }
    }
}
