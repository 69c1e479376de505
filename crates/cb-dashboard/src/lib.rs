//! # cb-dashboard
//!
//! State and derivation core for the CareBridge dashboard.
//!
//! One [`DashboardState`] owns the roster, the actor profile lists, the
//! family-update feed, and the current selection; the presentation layer
//! invokes its operations and re-renders from the returned state. All
//! operations are synchronous and run to completion — no locking, no
//! background work.
//!
//! ## Key components
//!
//! - [`DashboardState`] — the explicit state container and mutation log
//! - [`Selection`] / [`ViewerRole`] — role-scoped selection cascade with
//!   fallback resolution for dangling actor/child references
//! - [`DashboardMetrics`] / [`derive_metrics`] — aggregates recomputed
//!   from the full roster on every roster change
//! - [`SessionDraft`] — caller intent for logging a therapy session

pub mod metrics;
pub mod selection;
pub mod state;

pub use metrics::{derive_metrics, donor_average_progress, DashboardMetrics, UpcomingEntry};
pub use selection::{Selection, ViewerRole};
pub use state::{DashboardState, SessionDraft};
