// update.rs — Post a family update and print the child's feed.

use cb_dashboard::DashboardState;

pub fn execute(state: &mut DashboardState, child_id: &str, message: &str) -> anyhow::Result<()> {
    state.add_family_update(child_id, message);

    let feed = state.updates_for(child_id);
    if feed.is_empty() {
        println!("Update dropped — the message must be non-blank.");
        return Ok(());
    }

    println!("Updates for {child_id} ({}):", feed.len());
    for update in feed {
        println!(
            "  {}  {}",
            update.created_at.format("%Y-%m-%d %H:%M"),
            update.message
        );
    }

    Ok(())
}
