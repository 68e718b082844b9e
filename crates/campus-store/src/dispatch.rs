//! Actions split into a request and the message it resolves to.
//!
//! `begin_*` methods do their synchronous work up front (validation, loading
//! flags, confirmation) and either resolve immediately or return a future.
//! The future owns everything it needs, so the caller may await it anywhere
//! and hand the resulting message back to [`ViewStore::apply`].

use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::error::StoreError;
use crate::lifecycle::Stamped;

/// How an action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action succeeded and state was updated.
    Completed,
    /// Refused before any request (validation).
    Rejected(StoreError),
    /// The request failed; state is unchanged apart from error flags.
    Failed(StoreError),
    /// The user declined the confirmation prompt.
    Declined,
    /// The store was not ready for mutations.
    NotReady,
    /// The result arrived for a retired view and was dropped.
    Discarded,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether the action was refused or failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Failed(_))
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Rejected(error) | Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Result of starting an action.
pub enum Dispatch<M> {
    /// A request is needed; await it and apply the message.
    Request(BoxFuture<'static, Stamped<M>>),
    /// Nothing to send.
    Resolved(ActionOutcome),
}

impl<M: Send + 'static> Dispatch<M> {
    /// Wrap a request future, stamping its message with `generation`.
    pub fn request<F>(generation: u64, future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self::Request(
            future
                .map(move |message| Stamped {
                    generation,
                    message,
                })
                .boxed(),
        )
    }
}

impl<M> Dispatch<M> {
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// The immediate outcome, if no request was needed.
    pub fn resolved(&self) -> Option<&ActionOutcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            Self::Request(_) => None,
        }
    }
}

impl<M> fmt::Debug for Dispatch<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(_) => f.write_str("Dispatch::Request(..)"),
            Self::Resolved(outcome) => f.debug_tuple("Dispatch::Resolved").field(outcome).finish(),
        }
    }
}

/// A store that folds request results back into its state.
pub trait ViewStore {
    type Message: Send + 'static;

    /// Apply a result. Stale or unmounted results are discarded.
    fn apply(&mut self, message: Stamped<Self::Message>) -> ActionOutcome;
}

/// Await a dispatch (if it needs a request) and apply its message.
pub async fn settle<S: ViewStore>(store: &mut S, dispatch: Dispatch<S::Message>) -> ActionOutcome {
    match dispatch {
        Dispatch::Resolved(outcome) => outcome,
        Dispatch::Request(request) => {
            let message = request.await;
            store.apply(message)
        }
    }
}
