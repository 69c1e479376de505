// goal.rs — TherapyGoal and the tiered progress classification.
//
// A goal tracks a child's progress toward a target percentage. The status
// band is never stored independently of the numbers: it is always the
// classification of `current / target`, established at seed load and
// maintained by `with_progress`. Nothing else writes `status`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three-band progress classification for a therapy goal.
///
/// The `#[serde(rename_all = "snake_case")]` attribute makes this
/// serialize as `"on_track"` / `"needs_support"` / `"at_risk"` in JSON.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Progress ratio at or above 80% of target.
    OnTrack,

    /// Progress ratio in the 55%–80% band.
    NeedsSupport,

    /// Progress ratio below 55% of target.
    ///
    /// Also the default so that seed files may omit the field entirely —
    /// seed normalization recomputes it before anything reads it.
    #[default]
    AtRisk,
}

impl GoalStatus {
    /// Classify a progress ratio into its status band.
    ///
    /// Band edges are inclusive on the higher tier: exactly 80% is
    /// `OnTrack`, exactly 55% is `NeedsSupport`.
    ///
    /// `target` is guaranteed positive by seed validation; this function
    /// does not defend against zero.
    pub fn classify(current: u32, target: u32) -> Self {
        let ratio = f64::from(current) / f64::from(target);
        if ratio >= 0.80 {
            GoalStatus::OnTrack
        } else if ratio >= 0.55 {
            GoalStatus::NeedsSupport
        } else {
            GoalStatus::AtRisk
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::OnTrack => write!(f, "on_track"),
            GoalStatus::NeedsSupport => write!(f, "needs_support"),
            GoalStatus::AtRisk => write!(f, "at_risk"),
        }
    }
}

/// A therapy goal owned by exactly one child on the roster.
///
/// `baseline` and `target` are fixed at creation; `current` moves only
/// through [`TherapyGoal::with_progress`], which is the single reclassification
/// path (invoked by the dashboard's session log).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyGoal {
    /// Identifier unique within the roster (seed-provided, e.g. "g1").
    pub goal_id: String,

    /// Category label (e.g., "Speech & Language").
    pub category: String,

    /// Free-text description of what the goal works toward.
    pub description: String,

    /// Percent progress when the goal was opened. Immutable.
    pub baseline: u32,

    /// Current percent progress, always within 0..=target.
    pub current: u32,

    /// Percent ceiling for this goal. Immutable and always positive.
    pub target: u32,

    /// Status band — always `GoalStatus::classify(current, target)`.
    #[serde(default)]
    pub status: GoalStatus,
}

impl TherapyGoal {
    /// Return a copy of this goal advanced to `new_current`.
    ///
    /// `new_current` is clamped to `target` and the status band is
    /// recomputed from the clamped value. Pure: calling it twice with the
    /// same input yields the same output.
    pub fn with_progress(&self, new_current: u32) -> TherapyGoal {
        let current = new_current.min(self.target);
        TherapyGoal {
            current,
            status: GoalStatus::classify(current, self.target),
            ..self.clone()
        }
    }

    /// Progress ratio `current / target` in 0.0..=1.0.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.target)
    }
}
