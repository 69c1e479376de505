// update.rs — FamilyUpdate: a free-text note from a child's family.
//
// Updates are not part of ChildProfile: they originate from the parent
// role and live in a side map keyed by child id, newest first. The
// dashboard owns that map; this module only defines the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One free-text update posted by a child's family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyUpdate {
    /// Synthesized identifier, unique within the process lifetime.
    pub update_id: String,

    /// The update text, already trimmed by the caller.
    pub message: String,

    /// When the update was posted (UTC).
    pub created_at: DateTime<Utc>,
}

impl FamilyUpdate {
    /// Create a new update stamped with the current time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            update_id: Uuid::new_v4().to_string(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
