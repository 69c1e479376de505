// session.rs — Log a therapy session against the in-memory state.

use chrono::Utc;

use cb_dashboard::{DashboardState, SessionDraft};

pub fn execute(
    state: &mut DashboardState,
    child_id: &str,
    focus: &str,
    rating: u8,
    goal_ids: &[String],
    therapist_id: &str,
    notes: &str,
) -> anyhow::Result<()> {
    let sessions_before = state
        .children
        .iter()
        .find(|c| c.child_id == child_id)
        .map(|c| c.sessions.len());

    state.log_session(SessionDraft {
        child_id: child_id.to_string(),
        focus: focus.to_string(),
        notes: notes.to_string(),
        rating,
        date: Utc::now(),
        goal_ids: goal_ids.to_vec(),
        therapist_id: therapist_id.to_string(),
    });

    let Some(child) = state.children.iter().find(|c| c.child_id == child_id) else {
        println!("No child '{child_id}' on the roster — nothing logged.");
        return Ok(());
    };
    if sessions_before == Some(child.sessions.len()) {
        println!("Session draft dropped — focus must be non-blank and at least one goal given.");
        return Ok(());
    }

    let logged = &child.sessions[0];
    println!("Logged session {} for {}.", logged.session_id, child.name);
    println!();
    println!("Goals after this session:");
    for goal in &child.goals {
        let marker = if logged.goal_ids.contains(&goal.goal_id) {
            "*"
        } else {
            " "
        };
        println!(
            " {} {}: {}/{} ({})",
            marker, goal.category, goal.current, goal.target, goal.status
        );
    }
    println!();
    println!(
        "Sessions this week: {}   Average goal progress: {}%",
        state.metrics.sessions_this_week, state.metrics.average_goal_progress
    );

    Ok(())
}
