// error.rs — Error types for roster and seed loading.

use thiserror::Error;

/// Errors that can occur while loading or validating a seed snapshot.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to deserialize seed data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A goal in the seed carries a non-positive target, which would make
    /// progress classification undefined.
    #[error("goal {goal_id} of child {child_id} has a non-positive target")]
    InvalidGoalTarget { child_id: String, goal_id: String },
}
