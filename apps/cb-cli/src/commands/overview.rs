// overview.rs — Center overview: metrics, highlights, upcoming visits.

use cb_dashboard::DashboardState;

pub fn execute(state: &DashboardState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&state.metrics)?);
        return Ok(());
    }

    let m = &state.metrics;
    println!("CareBridge — center overview");
    println!();
    println!("Active children:       {}", m.active_children);
    println!("Average goal progress: {}%", m.average_goal_progress);
    println!("Sessions this week:    {}", m.sessions_this_week);
    println!("Goals needing support: {}", m.goals_needing_support);

    if !state.highlights.is_empty() {
        println!();
        println!("Highlights:");
        for card in &state.highlights {
            println!("  {} — {}", card.title, card.detail);
        }
    }

    if !m.upcoming.is_empty() {
        println!();
        println!("Upcoming sessions:");
        for entry in &m.upcoming {
            println!(
                "  {}  {} — {} (therapist {})",
                entry.session.date.format("%Y-%m-%d %H:%M"),
                entry.child_name,
                entry.session.focus,
                entry.session.therapist_id
            );
        }
    }

    Ok(())
}
