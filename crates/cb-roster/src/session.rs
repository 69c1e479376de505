// session.rs — TherapySession: one logged therapy visit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder recorded when a session is logged without notes.
pub const DEFAULT_SESSION_NOTES: &str = "No additional notes recorded.";

/// A logged therapy session, owned by exactly one child.
///
/// Children hold their sessions most-recent-first; the dashboard prepends
/// on log and never reorders existing entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapySession {
    /// Synthesized identifier, unique within the process lifetime.
    pub session_id: String,

    /// When the session took place (UTC).
    pub date: DateTime<Utc>,

    /// What the session worked on. Required non-blank.
    pub focus: String,

    /// Goals addressed, a non-empty subset of the owning child's goals.
    pub goal_ids: Vec<String>,

    /// Therapist-assigned outcome rating, 1 (hard day) to 5 (great day).
    pub rating: u8,

    /// Session notes; [`DEFAULT_SESSION_NOTES`] when none were given.
    pub notes: String,

    /// The therapist who ran the session — looked up by id against the
    /// therapist list, never owned.
    pub therapist_id: String,
}
