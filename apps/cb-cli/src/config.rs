// config.rs — Optional cb.toml configuration for the CLI.
//
// A missing config file means all defaults; a present but malformed one
// is a real error. Every field carries a serde default so partial files
// work.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level CLI configuration from cb.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Path to the seed data file.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Role the dashboard starts in: "center", "therapist", "parent",
    /// or "donor".
    #[serde(default = "default_role")]
    pub default_role: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            default_role: default_role(),
        }
    }
}

// Serde default functions
fn default_data_path() -> PathBuf {
    PathBuf::from("data/carebridge.json")
}

fn default_role() -> String {
    "center".to_string()
}

impl CliConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
