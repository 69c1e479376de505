// metrics.rs — Dashboard-wide aggregate metrics.
//
// Everything here is derived: pure functions over the roster, recomputed
// by the state container after every roster mutation and never cached
// across one. Empty collections average to zero rather than erroring.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use cb_roster::{ChildProfile, DonorProfile, GoalStatus, UpcomingSession};

/// One upcoming visit in the agency-wide list, tagged with its child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEntry {
    /// The child the visit belongs to.
    pub child_id: String,

    /// The child's display name, carried along for the agency view.
    pub child_name: String,

    /// The scheduled visit.
    pub session: UpcomingSession,
}

/// The derived summary numbers shown across the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Number of children on the roster.
    pub active_children: usize,

    /// Unweighted mean of `current` across every goal of every child,
    /// rounded to the nearest integer. Zero when no goals exist.
    pub average_goal_progress: u32,

    /// Sessions across all children dated within the trailing 7 days,
    /// boundary inclusive. Future-dated sessions also count — there is
    /// deliberately no upper bound on the window.
    pub sessions_this_week: usize,

    /// Goals whose status is not on-track (needs-support or at-risk).
    pub goals_needing_support: usize,

    /// Every child's upcoming visits, flattened in roster order then
    /// per-child order. Not re-sorted by date across children.
    pub upcoming: Vec<UpcomingEntry>,
}

/// Recompute all dashboard metrics from the full roster.
///
/// `now` anchors the trailing-week window; callers pass `Utc::now()`
/// outside of tests.
pub fn derive_metrics(roster: &[ChildProfile], now: DateTime<Utc>) -> DashboardMetrics {
    let goal_count: usize = roster.iter().map(|c| c.goals.len()).sum();
    let average_goal_progress = if goal_count == 0 {
        0
    } else {
        let total: u32 = roster
            .iter()
            .flat_map(|c| &c.goals)
            .map(|g| g.current)
            .sum();
        (f64::from(total) / goal_count as f64).round() as u32
    };

    let week_start = now - Duration::days(7);
    let sessions_this_week = roster
        .iter()
        .flat_map(|c| &c.sessions)
        .filter(|s| s.date >= week_start)
        .count();

    let goals_needing_support = roster
        .iter()
        .flat_map(|c| &c.goals)
        .filter(|g| g.status != GoalStatus::OnTrack)
        .count();

    let upcoming = roster
        .iter()
        .flat_map(|c| {
            c.upcoming.iter().map(|s| UpcomingEntry {
                child_id: c.child_id.clone(),
                child_name: c.name.clone(),
                session: s.clone(),
            })
        })
        .collect();

    DashboardMetrics {
        active_children: roster.len(),
        average_goal_progress,
        sessions_this_week,
        goals_needing_support,
        upcoming,
    }
}

/// Mean of the donor's supported children's own mean goal progress.
///
/// A mean of per-child means, not a flat mean over all goals: each child
/// weighs equally in the donor panel no matter how many goals they carry.
/// Children missing from the roster are skipped; a supported child with
/// no goals contributes zero. Rounds once, on the outer mean.
pub fn donor_average_progress(donor: &DonorProfile, roster: &[ChildProfile]) -> u32 {
    let child_means: Vec<f64> = donor
        .child_ids
        .iter()
        .filter_map(|id| roster.iter().find(|c| &c.child_id == id))
        .map(|c| c.average_progress())
        .collect();
    if child_means.is_empty() {
        return 0;
    }
    (child_means.iter().sum::<f64>() / child_means.len() as f64).round() as u32
}
