// selection.rs — Role-scoped selection cascade.
//
// Four actor types (center staff, therapist, parent, donor) browse one
// shared child roster. The selection tracks which role is active, one
// active actor id per non-center role, and which child is in focus, and
// keeps those mutually consistent under role switches, actor switches,
// and direct child picks.
//
// The guarantee: the displayed child is always one the active actor can
// legitimately view. Dangling references (an actor or child that is no
// longer listed) are resolved by fallback, never surfaced as errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use cb_roster::{ActorProfile, ChildProfile, DonorProfile, ParentProfile, TherapistProfile};

/// Which kind of viewer the dashboard is currently scoped to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    /// Center staff — sees the whole roster, has no actor identity.
    Center,

    /// A therapist — sees children on their caseload.
    Therapist,

    /// A parent — sees their own children.
    Parent,

    /// A donor — sees the children they support.
    Donor,
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerRole::Center => write!(f, "center"),
            ViewerRole::Therapist => write!(f, "therapist"),
            ViewerRole::Parent => write!(f, "parent"),
            ViewerRole::Donor => write!(f, "donor"),
        }
    }
}

/// The dashboard's current selection state.
///
/// `child_id` is valid only if it names a child currently present in the
/// roster; otherwise it is treated as unresolved and
/// [`Selection::resolved_child`] falls back to the first visible child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// The active viewer role.
    pub role: ViewerRole,

    /// Active therapist, kept across role switches.
    pub therapist_id: Option<String>,

    /// Active parent, kept across role switches.
    pub parent_id: Option<String>,

    /// Active donor, kept across role switches.
    pub donor_id: Option<String>,

    /// The child in focus, if any.
    pub child_id: Option<String>,
}

impl Selection {
    /// The startup selection: center role, the first profile of each
    /// actor list, and the first child on the roster.
    pub fn initial(
        roster: &[ChildProfile],
        therapists: &[TherapistProfile],
        parents: &[ParentProfile],
        donors: &[DonorProfile],
    ) -> Self {
        Self {
            role: ViewerRole::Center,
            therapist_id: therapists.first().map(|t| t.therapist_id.clone()),
            parent_id: parents.first().map(|p| p.parent_id.clone()),
            donor_id: donors.first().map(|d| d.donor_id.clone()),
            child_id: roster.first().map(|c| c.child_id.clone()),
        }
    }

    /// Switch the active role, cascading the actor and child selection.
    ///
    /// Non-center roles fall back to the current actor if still listed,
    /// else the first profile; the focused child becomes the actor's
    /// first still-existing child (unresolved when the actor has none).
    /// Center keeps actor ids untouched and only re-validates the child
    /// against the roster.
    pub fn switch_role(
        &mut self,
        role: ViewerRole,
        roster: &[ChildProfile],
        therapists: &[TherapistProfile],
        parents: &[ParentProfile],
        donors: &[DonorProfile],
    ) {
        match role {
            ViewerRole::Center => {
                let stale = self
                    .child_id
                    .as_deref()
                    .is_none_or(|id| !roster_contains(roster, id));
                if stale {
                    self.child_id = roster.first().map(|c| c.child_id.clone());
                }
            }
            ViewerRole::Therapist => {
                cascade(&mut self.therapist_id, &mut self.child_id, therapists, roster)
            }
            ViewerRole::Parent => {
                cascade(&mut self.parent_id, &mut self.child_id, parents, roster)
            }
            ViewerRole::Donor => cascade(&mut self.donor_id, &mut self.child_id, donors, roster),
        }
        self.role = role;
        tracing::debug!(role = %self.role, child = ?self.child_id, "switched role");
    }

    /// Switch the active actor within the current role.
    ///
    /// Center has no actor identity, so the switch is ignored there. The
    /// focused child cascades to the new actor's first still-existing
    /// child.
    pub fn switch_actor(
        &mut self,
        actor_id: &str,
        roster: &[ChildProfile],
        therapists: &[TherapistProfile],
        parents: &[ParentProfile],
        donors: &[DonorProfile],
    ) {
        match self.role {
            ViewerRole::Center => {
                tracing::debug!(actor_id, "actor switch ignored for center role");
            }
            ViewerRole::Therapist => {
                adopt(&mut self.therapist_id, &mut self.child_id, actor_id, therapists, roster)
            }
            ViewerRole::Parent => {
                adopt(&mut self.parent_id, &mut self.child_id, actor_id, parents, roster)
            }
            ViewerRole::Donor => {
                adopt(&mut self.donor_id, &mut self.child_id, actor_id, donors, roster)
            }
        }
    }

    /// Focus a child directly. No actor or role change.
    pub fn pick_child(&mut self, child_id: impl Into<String>) {
        self.child_id = Some(child_id.into());
    }

    /// The children visible under the current role, in roster order.
    ///
    /// Center sees everything; a therapist sees children whose therapist
    /// list names them; parents and donors see the children on their own
    /// list. A role with no active actor sees nothing.
    pub fn visible_children<'a>(
        &self,
        roster: &'a [ChildProfile],
        therapists: &[TherapistProfile],
        parents: &[ParentProfile],
        donors: &[DonorProfile],
    ) -> Vec<&'a ChildProfile> {
        match self.role {
            ViewerRole::Center => roster.iter().collect(),
            ViewerRole::Therapist => match self.therapist_id.as_deref() {
                Some(tid) => roster
                    .iter()
                    .filter(|c| c.therapist_ids.iter().any(|id| id == tid))
                    .collect(),
                None => Vec::new(),
            },
            ViewerRole::Parent => enrolled_children(self.parent_id.as_deref(), parents, roster),
            ViewerRole::Donor => enrolled_children(self.donor_id.as_deref(), donors, roster),
        }
    }

    /// The child to display: the focused child when it is present and
    /// visible, else the first visible child, else the first child on
    /// the roster, else none (empty-state).
    pub fn resolved_child<'a>(
        &self,
        roster: &'a [ChildProfile],
        therapists: &[TherapistProfile],
        parents: &[ParentProfile],
        donors: &[DonorProfile],
    ) -> Option<&'a ChildProfile> {
        let visible = self.visible_children(roster, therapists, parents, donors);
        if let Some(id) = self.child_id.as_deref() {
            if let Some(child) = visible.iter().find(|c| c.child_id == id) {
                return Some(child);
            }
        }
        visible.first().copied().or_else(|| roster.first())
    }
}

fn roster_contains(roster: &[ChildProfile], child_id: &str) -> bool {
    roster.iter().any(|c| c.child_id == child_id)
}

/// Fallback-resolve the active actor for a role, then cascade the child.
fn cascade<A: ActorProfile>(
    active: &mut Option<String>,
    child_id: &mut Option<String>,
    profiles: &[A],
    roster: &[ChildProfile],
) {
    let actor = active
        .as_deref()
        .and_then(|id| profiles.iter().find(|p| p.id() == id))
        .or_else(|| profiles.first());
    *active = actor.map(|a| a.id().to_string());
    if let Some(actor) = actor {
        *child_id = first_enrolled_child(actor, roster);
    }
}

/// Set the active actor unconditionally, then cascade the child.
fn adopt<A: ActorProfile>(
    active: &mut Option<String>,
    child_id: &mut Option<String>,
    actor_id: &str,
    profiles: &[A],
    roster: &[ChildProfile],
) {
    *active = Some(actor_id.to_string());
    match profiles.iter().find(|p| p.id() == actor_id) {
        Some(actor) => *child_id = first_enrolled_child(actor, roster),
        None => tracing::debug!(actor_id, "actor id missing from profile list"),
    }
}

/// The first of the actor's children that still exists on the roster.
fn first_enrolled_child(actor: &impl ActorProfile, roster: &[ChildProfile]) -> Option<String> {
    actor
        .child_ids()
        .iter()
        .find(|id| roster_contains(roster, id))
        .cloned()
}

/// Roster entries on the actor's child list, in roster order.
fn enrolled_children<'a, A: ActorProfile>(
    active: Option<&str>,
    profiles: &[A],
    roster: &'a [ChildProfile],
) -> Vec<&'a ChildProfile> {
    let Some(actor) = active.and_then(|id| profiles.iter().find(|p| p.id() == id)) else {
        return Vec::new();
    };
    roster
        .iter()
        .filter(|c| actor.child_ids().iter().any(|id| *id == c.child_id))
        .collect()
}
