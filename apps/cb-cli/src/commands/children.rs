// children.rs — Role-scoped child listing with the resolved child marked.

use cb_dashboard::DashboardState;

use super::parse_role;

pub fn execute(
    state: &mut DashboardState,
    role: Option<&str>,
    actor: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(role) = role {
        state.switch_role(parse_role(role)?);
    }
    if let Some(actor) = actor {
        state.switch_actor(actor);
    }

    let resolved = state.resolved_child().map(|c| c.child_id.clone());
    let visible = state.visible_children();

    println!("Children visible as {} ({}):", state.selection.role, visible.len());
    if visible.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for child in visible {
        let marker = if resolved.as_deref() == Some(child.child_id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            " {} {}  {} — age {}, {}",
            marker, child.child_id, child.name, child.age, child.diagnosis
        );
        for goal in &child.goals {
            println!(
                "      {}: {}/{} ({})",
                goal.category, goal.current, goal.target, goal.status
            );
        }
    }

    Ok(())
}
