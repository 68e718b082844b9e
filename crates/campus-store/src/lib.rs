//! View-state stores for the campus back office.
//!
//! Each view owns one store. A store holds the in-memory copy of its data,
//! load and error flags, pending toasts and navigation requests. Actions are
//! split into a synchronous `begin_*` step returning a [`Dispatch`] and an
//! [`apply`](ViewStore::apply) step folding the request's result back in,
//! so a result arriving for a retired view can be dropped.
//!
//! Derived views (filters, summaries, display names) live in
//! [`projection`] as pure functions.
//!
//! # Example
//!
//! ```no_run
//! use campus_client::{ClientSettings, ResourceClient};
//! use campus_store::{FeesStore, ViewStore, settle};
//!
//! # async fn run() -> campus_client::Result<()> {
//! let client = ResourceClient::connect(&ClientSettings::default())?;
//! let mut fees = FeesStore::new(client);
//! let dispatch = fees.mount();
//! settle(&mut fees, dispatch).await;
//! println!("collected {}", fees.summary().collected);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod dashboard;
pub mod dispatch;
pub mod error;
pub mod fees;
pub mod form;
pub mod inquiries;
pub mod lifecycle;
pub mod navigation;
pub mod projection;
pub mod students;
pub mod toast;

pub use collection::Collection;
pub use dashboard::{DashboardMessage, DashboardStore};
pub use dispatch::{ActionOutcome, Dispatch, ViewStore, settle};
pub use error::{Result, StoreError};
pub use fees::{FeesMessage, FeesStore};
pub use form::{FeeForm, FormMessage, FormMode, FormResource, FormStore, InquiryForm, StudentForm};
pub use inquiries::{InquiriesMessage, InquiriesStore};
pub use lifecycle::{LoadState, Stamped, ViewLifecycle};
pub use navigation::Route;
pub use projection::{FeeSummary, InquirySummary, StatusFilter, UNKNOWN_STUDENT};
pub use students::{StudentsMessage, StudentsStore};
pub use toast::{Toast, ToastKind, ToastQueue};
