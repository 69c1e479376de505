// actors.rs — The three viewer-facing actor profile kinds.
//
// Therapists, parents, and donors all reference children by id only —
// weak references into the roster. The selection cascade treats the three
// kinds uniformly through the ActorProfile trait, so the fallback rule
// ("current actor if still listed, else first profile; then first
// still-existing child") is written once.

use serde::{Deserialize, Serialize};

/// Common view of an actor profile: identity plus associated children.
///
/// Implementations decide nothing; this exists so the selection cascade
/// can resolve fallbacks generically across therapist/parent/donor lists.
pub trait ActorProfile {
    /// The actor's identifier.
    fn id(&self) -> &str;

    /// Children associated with this actor (weak references).
    fn child_ids(&self) -> &[String];
}

/// A therapist on staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistProfile {
    /// Identifier unique within the therapist list (e.g. "t1").
    pub therapist_id: String,

    /// Display name.
    pub name: String,

    /// Children on this therapist's caseload.
    pub child_ids: Vec<String>,
}

/// A parent or guardian account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentProfile {
    /// Identifier unique within the parent list (e.g. "p1").
    pub parent_id: String,

    /// Display name.
    pub name: String,

    /// This parent's children.
    pub child_ids: Vec<String>,
}

/// A donor sponsoring children through the center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorProfile {
    /// Identifier unique within the donor list (e.g. "d1").
    pub donor_id: String,

    /// Display name.
    pub name: String,

    /// Children this donor supports.
    pub child_ids: Vec<String>,

    /// Total monetary contribution, in dollars.
    pub contribution: f64,

    /// Mission labels the donor has funded (e.g. "Summer camp 2025").
    #[serde(default)]
    pub missions: Vec<String>,
}

impl ActorProfile for TherapistProfile {
    fn id(&self) -> &str {
        &self.therapist_id
    }

    fn child_ids(&self) -> &[String] {
        &self.child_ids
    }
}

impl ActorProfile for ParentProfile {
    fn id(&self) -> &str {
        &self.parent_id
    }

    fn child_ids(&self) -> &[String] {
        &self.child_ids
    }
}

impl ActorProfile for DonorProfile {
    fn id(&self) -> &str {
        &self.donor_id
    }

    fn child_ids(&self) -> &[String] {
        &self.child_ids
    }
}
