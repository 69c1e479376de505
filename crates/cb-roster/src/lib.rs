//! # cb-roster
//!
//! Entity model and goal progress engine for CareBridge.
//!
//! The roster is the ordered collection of all child profiles; each child
//! owns its therapy goals, logged sessions, and upcoming visits. Actor
//! profiles (therapists, parents, donors) reference children by id only.
//!
//! ## Key components
//!
//! - [`ChildProfile`] — one child, owning goals/sessions/upcoming visits
//! - [`TherapyGoal`] / [`GoalStatus`] — tiered progress classification;
//!   [`TherapyGoal::with_progress`] is the single reclassification path
//! - [`TherapistProfile`] / [`ParentProfile`] / [`DonorProfile`] — actor
//!   kinds unified by the [`ActorProfile`] trait
//! - [`FamilyUpdate`] — free-text family notes, kept outside the roster
//! - [`DashboardSeed`] — the startup snapshot, validated and normalized
//!   on load

pub mod actors;
pub mod child;
pub mod dataset;
pub mod error;
pub mod goal;
pub mod session;
pub mod update;

pub use actors::{ActorProfile, DonorProfile, ParentProfile, TherapistProfile};
pub use child::{ChildProfile, UpcomingSession};
pub use dataset::{DashboardSeed, HighlightCard};
pub use error::RosterError;
pub use goal::{GoalStatus, TherapyGoal};
pub use session::{TherapySession, DEFAULT_SESSION_NOTES};
pub use update::FamilyUpdate;
