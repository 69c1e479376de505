// dataset.rs — DashboardSeed: the startup snapshot.
//
// The dashboard is seeded once from a JSON snapshot holding the roster,
// the three actor lists, and the highlight cards. Loading validates every
// goal target and normalizes every goal's status so the classification
// invariant holds before anything reads the roster. After construction
// the seed is only consumed by the dashboard state container; nothing
// mutates it in place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actors::{DonorProfile, ParentProfile, TherapistProfile};
use crate::child::ChildProfile;
use crate::error::RosterError;

/// A center-curated highlight card shown on the overview.
///
/// Read once from the seed and passed through to views unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightCard {
    /// Seed-provided identifier.
    pub card_id: String,

    /// Card headline.
    pub title: String,

    /// Card body text.
    pub detail: String,
}

/// The static initial snapshot the dashboard is constructed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSeed {
    /// The child roster, in display order.
    pub children: Vec<ChildProfile>,

    /// Staff therapists.
    pub therapists: Vec<TherapistProfile>,

    /// Parent accounts.
    pub parents: Vec<ParentProfile>,

    /// Donor accounts.
    pub donors: Vec<DonorProfile>,

    /// Highlight cards for the center overview.
    #[serde(default)]
    pub highlights: Vec<HighlightCard>,
}

impl DashboardSeed {
    /// Parse a seed from JSON, then validate and normalize it.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let mut seed: DashboardSeed = serde_json::from_str(json)?;
        seed.normalize()?;
        Ok(seed)
    }

    /// Load a seed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RosterError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate goal targets and re-derive every goal's status band.
    ///
    /// Seeds may carry a stale or missing status; after normalization
    /// `status` always agrees with `current / target`, and `current`
    /// never exceeds `target`.
    fn normalize(&mut self) -> Result<(), RosterError> {
        for child in &mut self.children {
            for goal in &mut child.goals {
                if goal.target == 0 {
                    return Err(RosterError::InvalidGoalTarget {
                        child_id: child.child_id.clone(),
                        goal_id: goal.goal_id.clone(),
                    });
                }
                let normalized = goal.with_progress(goal.current);
                if normalized.status != goal.status || normalized.current != goal.current {
                    tracing::debug!(
                        child_id = %child.child_id,
                        goal_id = %goal.goal_id,
                        "normalized stale goal state from seed"
                    );
                }
                *goal = normalized;
            }
        }
        Ok(())
    }
}
