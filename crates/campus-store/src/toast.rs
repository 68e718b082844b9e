//! Non-blocking user notifications.
//!
//! Stores push toasts as actions resolve; the presentation layer drains and
//! shows them.

use std::collections::VecDeque;
use std::fmt;

use campus_client::ApiError;
use campus_model::ValidationError;

use crate::error::StoreError;

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Action completed.
    Success,
    /// Neutral information.
    Info,
    /// Degraded but usable.
    Warning,
    /// Action failed.
    Error,
}

impl ToastKind {
    /// Short tag for plain-text output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.tag(), self.message)
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, message = %toast.message, "toast");
        self.pending.push_back(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Info, message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Warning, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, message));
    }

    /// Record a failed request: classify it, log it and show it.
    pub fn report(&mut self, error: ApiError, fallback: &str) -> StoreError {
        let error = StoreError::from_api(error, fallback);
        tracing::warn!(%error, "store action failed");
        self.error(error.user_message());
        error
    }

    /// Record a form refused before any request.
    pub fn reject(&mut self, error: ValidationError) -> StoreError {
        let error = StoreError::Validation(error);
        tracing::debug!(field = ?error.field(), "validation failed");
        self.error(error.user_message());
        error
    }

    /// Take every pending toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.pending.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending toasts of one kind.
    pub fn count(&self, kind: ToastKind) -> usize {
        self.pending.iter().filter(|t| t.kind == kind).count()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.pending.back()
    }
}
