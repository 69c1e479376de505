// child.rs — ChildProfile: one child on the roster, owning goals and sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::goal::TherapyGoal;
use crate::session::TherapySession;

/// A scheduled future session for a child.
///
/// Upcoming entries come from the seed snapshot and are only ever read;
/// logging a session does not consume them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingSession {
    /// Seed-provided identifier.
    pub session_id: String,

    /// Scheduled time (UTC).
    pub date: DateTime<Utc>,

    /// Planned focus for the visit.
    pub focus: String,

    /// The therapist expected to run the visit (weak reference).
    pub therapist_id: String,
}

/// One child on the roster.
///
/// The roster owns its children exclusively; goals and sessions belong to
/// their child and are never shared. `therapist_ids` are weak references
/// into the therapist profile list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildProfile {
    /// Identifier unique within the roster (seed-provided, e.g. "c1").
    pub child_id: String,

    /// Display name.
    pub name: String,

    /// Age in years.
    pub age: u8,

    /// Diagnosis label shown on the profile card.
    pub diagnosis: String,

    /// Avatar accent color (CSS-style string, passed through to views).
    pub avatar_color: String,

    /// Therapists assigned to this child.
    pub therapist_ids: Vec<String>,

    /// Therapy goals, insertion order = display order.
    #[serde(default)]
    pub goals: Vec<TherapyGoal>,

    /// Logged sessions, most recent first.
    #[serde(default)]
    pub sessions: Vec<TherapySession>,

    /// Scheduled future sessions, in schedule order.
    #[serde(default)]
    pub upcoming: Vec<UpcomingSession>,
}

impl ChildProfile {
    /// Look up one of this child's goals by id.
    pub fn goal(&self, goal_id: &str) -> Option<&TherapyGoal> {
        self.goals.iter().find(|g| g.goal_id == goal_id)
    }

    /// Whether `goal_id` names a goal owned by this child.
    pub fn owns_goal(&self, goal_id: &str) -> bool {
        self.goal(goal_id).is_some()
    }

    /// Unrounded mean of `current` across this child's goals.
    ///
    /// Defined as 0.0 for a child with no goals. Kept unrounded so the
    /// donor panel's mean-of-means rounds once, at the outer mean.
    pub fn average_progress(&self) -> f64 {
        if self.goals.is_empty() {
            return 0.0;
        }
        let total: u32 = self.goals.iter().map(|g| g.current).sum();
        f64::from(total) / self.goals.len() as f64
    }
}
