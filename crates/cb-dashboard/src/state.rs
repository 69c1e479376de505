// state.rs — DashboardState: the owning container for all dashboard state.
//
// The presentation layer holds one DashboardState and re-renders from it
// after invoking an operation; there is no other writer. Every operation
// runs to completion synchronously, and the derived metrics are
// recomputed whenever the roster changes.
//
// Validation is soft: a blank required field or an unknown child id makes
// the operation a traced no-op. No partial record is ever created, and
// nothing is surfaced as an error — the caller observes the absence of
// effect.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cb_roster::{
    ChildProfile, DashboardSeed, DonorProfile, FamilyUpdate, HighlightCard, ParentProfile,
    TherapistProfile, TherapySession, DEFAULT_SESSION_NOTES,
};

use crate::metrics::{self, DashboardMetrics};
use crate::selection::{Selection, ViewerRole};

/// Caller intent for logging one therapy session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDraft {
    /// The child the session belongs to.
    pub child_id: String,

    /// What the session worked on. Blank (after trimming) voids the draft.
    pub focus: String,

    /// Optional notes; blank becomes [`DEFAULT_SESSION_NOTES`].
    pub notes: String,

    /// Outcome rating, 1..=5.
    pub rating: u8,

    /// When the session took place.
    pub date: DateTime<Utc>,

    /// Goals the session addressed. Empty voids the draft.
    pub goal_ids: Vec<String>,

    /// The therapist who ran the session.
    pub therapist_id: String,
}

/// The dashboard's entire mutable state: roster, actor lists, family
/// updates, selection, and the current derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    /// The child roster, in display order. Mutated only by
    /// [`DashboardState::log_session`].
    pub children: Vec<ChildProfile>,

    /// Staff therapists, fixed after construction.
    pub therapists: Vec<TherapistProfile>,

    /// Parent accounts, fixed after construction.
    pub parents: Vec<ParentProfile>,

    /// Donor accounts, fixed after construction.
    pub donors: Vec<DonorProfile>,

    /// Center highlight cards, fixed after construction.
    pub highlights: Vec<HighlightCard>,

    /// Family updates keyed by child id, newest first. Kept outside the
    /// roster because updates originate from the parent role.
    pub family_updates: HashMap<String, Vec<FamilyUpdate>>,

    /// The current role/actor/child selection.
    pub selection: Selection,

    /// Metrics derived from the roster, refreshed on every roster change.
    pub metrics: DashboardMetrics,
}

impl DashboardState {
    /// Build the startup state from a validated seed snapshot.
    pub fn from_seed(seed: DashboardSeed) -> Self {
        let selection =
            Selection::initial(&seed.children, &seed.therapists, &seed.parents, &seed.donors);
        let metrics = metrics::derive_metrics(&seed.children, Utc::now());
        Self {
            children: seed.children,
            therapists: seed.therapists,
            parents: seed.parents,
            donors: seed.donors,
            highlights: seed.highlights,
            family_updates: HashMap::new(),
            selection,
            metrics,
        }
    }

    /// Switch the active viewer role (selection cascade, §role rules).
    pub fn switch_role(&mut self, role: ViewerRole) {
        self.selection
            .switch_role(role, &self.children, &self.therapists, &self.parents, &self.donors);
    }

    /// Switch the active actor within the current role.
    pub fn switch_actor(&mut self, actor_id: &str) {
        self.selection
            .switch_actor(actor_id, &self.children, &self.therapists, &self.parents, &self.donors);
    }

    /// Focus a child directly.
    pub fn pick_child(&mut self, child_id: impl Into<String>) {
        self.selection.pick_child(child_id);
    }

    /// The children visible under the current role, in roster order.
    pub fn visible_children(&self) -> Vec<&ChildProfile> {
        self.selection
            .visible_children(&self.children, &self.therapists, &self.parents, &self.donors)
    }

    /// The child the dashboard should display, after fallback resolution.
    pub fn resolved_child(&self) -> Option<&ChildProfile> {
        self.selection
            .resolved_child(&self.children, &self.therapists, &self.parents, &self.donors)
    }

    /// Log a therapy session and advance the goals it addressed.
    ///
    /// This is the only path that moves goal progress. Drafts with a
    /// blank focus, an empty goal set, or an unknown child are dropped
    /// whole.
    pub fn log_session(&mut self, draft: SessionDraft) {
        let focus = draft.focus.trim();
        if focus.is_empty() {
            tracing::debug!(child_id = %draft.child_id, "dropping session draft with blank focus");
            return;
        }
        if draft.goal_ids.is_empty() {
            tracing::debug!(child_id = %draft.child_id, "dropping session draft with no goals");
            return;
        }
        let Some(child) = self
            .children
            .iter_mut()
            .find(|c| c.child_id == draft.child_id)
        else {
            tracing::debug!(child_id = %draft.child_id, "dropping session draft for unknown child");
            return;
        };

        let rating = draft.rating.clamp(1, 5);
        let notes = match draft.notes.trim() {
            "" => DEFAULT_SESSION_NOTES.to_string(),
            trimmed => trimmed.to_string(),
        };
        let session = TherapySession {
            session_id: Uuid::new_v4().to_string(),
            date: draft.date,
            focus: focus.to_string(),
            goal_ids: draft.goal_ids.clone(),
            rating,
            notes,
            therapist_id: draft.therapist_id,
        };
        // Most-recent-first: prepend, never reorder what's already there.
        child.sessions.insert(0, session);

        let increment = rating_increment(rating);
        for goal in child
            .goals
            .iter_mut()
            .filter(|g| draft.goal_ids.contains(&g.goal_id))
        {
            *goal = goal.with_progress(goal.current + increment);
        }

        tracing::info!(
            child_id = %draft.child_id,
            rating,
            goals = draft.goal_ids.len(),
            "logged therapy session"
        );
        self.refresh_metrics();
    }

    /// Append a family update for a child. Blank messages are dropped;
    /// the roster is untouched either way.
    pub fn add_family_update(&mut self, child_id: &str, message: &str) {
        let message = message.trim();
        if message.is_empty() {
            tracing::debug!(child_id, "dropping blank family update");
            return;
        }
        self.family_updates
            .entry(child_id.to_string())
            .or_default()
            .insert(0, FamilyUpdate::new(message));
        tracing::info!(child_id, "added family update");
    }

    /// The update feed for a child, newest first. Empty when none exist.
    pub fn updates_for(&self, child_id: &str) -> &[FamilyUpdate] {
        self.family_updates
            .get(child_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Donor panel figure: mean of the donor's children's own progress means.
    pub fn donor_average_progress(&self, donor: &DonorProfile) -> u32 {
        metrics::donor_average_progress(donor, &self.children)
    }

    fn refresh_metrics(&mut self) {
        self.metrics = metrics::derive_metrics(&self.children, Utc::now());
    }
}

/// How far one session moves each addressed goal: a 5-rated session is
/// worth 8 percentage points, lower ratings proportionally less,
/// rounded half-up.
fn rating_increment(rating: u8) -> u32 {
    (f64::from(rating) / 5.0 * 8.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_roster::{GoalStatus, TherapyGoal};

    fn goal(id: &str, current: u32, target: u32) -> TherapyGoal {
        TherapyGoal {
            goal_id: id.to_string(),
            category: "Communication".to_string(),
            description: "Point to request".to_string(),
            baseline: 0,
            current,
            target,
            status: GoalStatus::classify(current, target),
        }
    }

    fn seed() -> DashboardSeed {
        DashboardSeed {
            children: vec![
                ChildProfile {
                    child_id: "c1".to_string(),
                    name: "Maya".to_string(),
                    age: 6,
                    diagnosis: "Autism spectrum".to_string(),
                    avatar_color: "#7c9a5e".to_string(),
                    therapist_ids: vec!["t1".to_string()],
                    goals: vec![goal("g1", 90, 100), goal("g2", 40, 100)],
                    sessions: Vec::new(),
                    upcoming: Vec::new(),
                },
                ChildProfile {
                    child_id: "c2".to_string(),
                    name: "Leo".to_string(),
                    age: 9,
                    diagnosis: "Cerebral palsy".to_string(),
                    avatar_color: "#5e7c9a".to_string(),
                    therapist_ids: vec!["t1".to_string()],
                    goals: vec![goal("g3", 70, 100)],
                    sessions: Vec::new(),
                    upcoming: Vec::new(),
                },
            ],
            therapists: vec![TherapistProfile {
                therapist_id: "t1".to_string(),
                name: "Dr. Okafor".to_string(),
                child_ids: vec!["c1".to_string(), "c2".to_string()],
            }],
            parents: vec![ParentProfile {
                parent_id: "p1".to_string(),
                name: "Rosa Delgado".to_string(),
                child_ids: vec!["c1".to_string()],
            }],
            donors: vec![DonorProfile {
                donor_id: "d1".to_string(),
                name: "Harbor Foundation".to_string(),
                child_ids: vec!["c1".to_string(), "c2".to_string()],
                contribution: 12_500.0,
                missions: vec!["Sensory room".to_string()],
            }],
            highlights: Vec::new(),
        }
    }

    fn draft(child_id: &str, focus: &str, rating: u8, goal_ids: &[&str]) -> SessionDraft {
        SessionDraft {
            child_id: child_id.to_string(),
            focus: focus.to_string(),
            notes: String::new(),
            rating,
            date: Utc::now(),
            goal_ids: goal_ids.iter().map(|g| g.to_string()).collect(),
            therapist_id: "t1".to_string(),
        }
    }

    #[test]
    fn from_seed_derives_initial_metrics_and_selection() {
        let state = DashboardState::from_seed(seed());
        assert_eq!(state.selection.role, ViewerRole::Center);
        assert_eq!(state.selection.child_id.as_deref(), Some("c1"));
        assert_eq!(state.metrics.active_children, 2);
        // (90 + 40 + 70) / 3 = 66.67 → 67
        assert_eq!(state.metrics.average_goal_progress, 67);
    }

    #[test]
    fn rating_increment_table() {
        assert_eq!(rating_increment(1), 2);
        assert_eq!(rating_increment(2), 3);
        assert_eq!(rating_increment(3), 5);
        assert_eq!(rating_increment(4), 6);
        assert_eq!(rating_increment(5), 8);
    }

    #[test]
    fn log_session_prepends_and_advances_addressed_goals() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c1", "Phrase practice", 5, &["g2"]));

        let child = &state.children[0];
        assert_eq!(child.sessions.len(), 1);
        assert_eq!(child.sessions[0].focus, "Phrase practice");
        assert_eq!(child.sessions[0].notes, DEFAULT_SESSION_NOTES);
        // g2 advanced by 8; g1 untouched.
        assert_eq!(child.goal("g2").unwrap().current, 48);
        assert_eq!(child.goal("g1").unwrap().current, 90);
    }

    #[test]
    fn log_session_clamps_progress_at_target_and_reclassifies() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c1", "Review week", 5, &["g1"]));

        let g1 = state.children[0].goal("g1").unwrap();
        // round(5/5 * 8) = 8; min(100, 98) = 98.
        assert_eq!(g1.current, 98);
        assert_eq!(g1.status, GoalStatus::OnTrack);
    }

    #[test]
    fn log_session_orders_history_most_recent_first() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c1", "First", 3, &["g1"]));
        state.log_session(draft("c1", "Second", 3, &["g1"]));

        let focuses: Vec<&str> = state.children[0]
            .sessions
            .iter()
            .map(|s| s.focus.as_str())
            .collect();
        assert_eq!(focuses, ["Second", "First"]);
    }

    #[test]
    fn log_session_with_blank_focus_is_a_no_op() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c1", "   ", 4, &["g1"]));

        assert!(state.children[0].sessions.is_empty());
        assert_eq!(state.children[0].goal("g1").unwrap().current, 90);
    }

    #[test]
    fn log_session_with_no_goals_is_a_no_op() {
        let mut state = DashboardState::from_seed(seed());
        let before = state.children.clone();
        state.log_session(draft("c1", "Valid focus", 4, &[]));

        assert_eq!(state.children[0].sessions.len(), 0);
        assert_eq!(
            state.children[0].goal("g1").unwrap().current,
            before[0].goal("g1").unwrap().current
        );
    }

    #[test]
    fn log_session_for_unknown_child_is_a_no_op() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c9", "Valid focus", 4, &["g1"]));
        assert!(state.children.iter().all(|c| c.sessions.is_empty()));
    }

    #[test]
    fn log_session_ignores_goal_ids_foreign_to_the_child() {
        let mut state = DashboardState::from_seed(seed());
        // g3 belongs to c2, not c1 — only g2 moves.
        state.log_session(draft("c1", "Mixed ids", 5, &["g2", "g3"]));

        assert_eq!(state.children[0].goal("g2").unwrap().current, 48);
        assert_eq!(state.children[1].goal("g3").unwrap().current, 70);
    }

    #[test]
    fn log_session_keeps_given_notes_and_trims_them() {
        let mut state = DashboardState::from_seed(seed());
        let mut d = draft("c1", "Focus", 3, &["g1"]);
        d.notes = "  great engagement today  ".to_string();
        state.log_session(d);
        assert_eq!(state.children[0].sessions[0].notes, "great engagement today");
    }

    #[test]
    fn log_session_clamps_out_of_range_rating() {
        let mut state = DashboardState::from_seed(seed());
        state.log_session(draft("c1", "Focus", 9, &["g2"]));
        let s = &state.children[0].sessions[0];
        assert_eq!(s.rating, 5);
        assert_eq!(state.children[0].goal("g2").unwrap().current, 48);
    }

    #[test]
    fn log_session_refreshes_metrics() {
        let mut state = DashboardState::from_seed(seed());
        assert_eq!(state.metrics.sessions_this_week, 0);
        state.log_session(draft("c1", "Focus", 5, &["g2"]));

        assert_eq!(state.metrics.sessions_this_week, 1);
        // (90 + 48 + 70) / 3 = 69.33 → 69
        assert_eq!(state.metrics.average_goal_progress, 69);
    }

    #[test]
    fn family_update_feed_starts_empty_and_prepends() {
        let mut state = DashboardState::from_seed(seed());
        assert!(state.updates_for("c1").is_empty());

        state.add_family_update("c1", "hello");
        assert_eq!(state.updates_for("c1").len(), 1);
        assert_eq!(state.updates_for("c1")[0].message, "hello");

        state.add_family_update("c1", "second note");
        assert_eq!(state.updates_for("c1")[0].message, "second note");
        assert_eq!(state.updates_for("c1")[1].message, "hello");
    }

    #[test]
    fn blank_family_update_is_a_no_op() {
        let mut state = DashboardState::from_seed(seed());
        state.add_family_update("c1", "hello");
        state.add_family_update("c1", "   ");
        assert_eq!(state.updates_for("c1").len(), 1);
    }

    #[test]
    fn family_update_does_not_touch_the_roster() {
        let mut state = DashboardState::from_seed(seed());
        let before = state.metrics.clone();
        state.add_family_update("c1", "hello");
        assert_eq!(state.metrics.average_goal_progress, before.average_goal_progress);
        assert!(state.children[0].sessions.is_empty());
    }

    #[test]
    fn donor_average_progress_passthrough() {
        let state = DashboardState::from_seed(seed());
        let donor = state.donors[0].clone();
        // c1 mean = (90+40)/2 = 65; c2 mean = 70; (65+70)/2 = 67.5 → 68.
        assert_eq!(state.donor_average_progress(&donor), 68);
    }
}
