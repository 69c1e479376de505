// mod.rs — CLI command implementations.

pub mod children;
pub mod donors;
pub mod overview;
pub mod session;
pub mod update;

use cb_dashboard::ViewerRole;

/// Parse a role name as given on the command line or in cb.toml.
pub fn parse_role(name: &str) -> anyhow::Result<ViewerRole> {
    match name {
        "center" => Ok(ViewerRole::Center),
        "therapist" => Ok(ViewerRole::Therapist),
        "parent" => Ok(ViewerRole::Parent),
        "donor" => Ok(ViewerRole::Donor),
        other => anyhow::bail!(
            "unknown role '{other}' (expected center, therapist, parent, or donor)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_accepts_all_four_roles() {
        assert_eq!(parse_role("center").unwrap(), ViewerRole::Center);
        assert_eq!(parse_role("therapist").unwrap(), ViewerRole::Therapist);
        assert_eq!(parse_role("parent").unwrap(), ViewerRole::Parent);
        assert_eq!(parse_role("donor").unwrap(), ViewerRole::Donor);
    }

    #[test]
    fn parse_role_rejects_unknown_names() {
        assert!(parse_role("admin").is_err());
    }
}
