// donors.rs — Donor panels: contribution, missions, supported children.

use cb_dashboard::DashboardState;

pub fn execute(state: &DashboardState) -> anyhow::Result<()> {
    if state.donors.is_empty() {
        println!("No donors on file.");
        return Ok(());
    }

    for donor in &state.donors {
        println!(
            "{} — ${:.2} contributed, average progress {}%",
            donor.name,
            donor.contribution,
            state.donor_average_progress(donor)
        );
        if !donor.missions.is_empty() {
            println!("  Missions: {}", donor.missions.join(", "));
        }
        for child_id in &donor.child_ids {
            match state.children.iter().find(|c| &c.child_id == child_id) {
                Some(child) => println!(
                    "  {}  {} — {} goals",
                    child.child_id,
                    child.name,
                    child.goals.len()
                ),
                None => println!("  {child_id}  (no longer on the roster)"),
            }
        }
        println!();
    }

    Ok(())
}
