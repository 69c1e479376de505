//! # cb-cli
//!
//! Command-line interface for the CareBridge dashboard core.
//!
//! Loads a seed snapshot, drives the in-memory state container, and
//! prints role-scoped views:
//! - `cb overview` — center metrics, highlights, agency-wide upcoming visits
//! - `cb children` — children visible under a role, resolved child marked
//! - `cb log-session` — log a session and show the reclassified goals
//! - `cb family-update` — post an update and show the child's feed
//! - `cb donors` — donor panels with per-donor average progress
//!
//! State is in-memory only: each invocation loads the seed fresh and
//! applies at most one mutation (persistence is deliberately out of
//! scope for the core).

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cb_dashboard::DashboardState;
use cb_roster::DashboardSeed;

/// CareBridge CLI — browse the roster and drive the dashboard core.
#[derive(Parser)]
#[command(name = "cb", version, about)]
struct Cli {
    /// Path to the seed data file (overrides cb.toml).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Path to the CLI config file.
    #[arg(long, default_value = "cb.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show center metrics, highlights, and upcoming visits.
    Overview {
        /// Print the metrics record as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the children visible under a role.
    Children {
        /// Role to browse as (center, therapist, parent, donor).
        #[arg(long)]
        role: Option<String>,
        /// Actor id to browse as (therapist/parent/donor id).
        #[arg(long)]
        actor: Option<String>,
    },
    /// Log a therapy session and show the reclassified goals.
    LogSession {
        /// Child the session belongs to.
        #[arg(long)]
        child: String,
        /// What the session worked on.
        #[arg(long)]
        focus: String,
        /// Outcome rating, 1 (hard day) to 5 (great day).
        #[arg(long)]
        rating: u8,
        /// Comma-separated goal ids the session addressed.
        #[arg(long, value_delimiter = ',')]
        goals: Vec<String>,
        /// Therapist who ran the session.
        #[arg(long)]
        therapist: String,
        /// Session notes.
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Post a family update and show the child's feed.
    FamilyUpdate {
        /// Child the update is about.
        #[arg(long)]
        child: String,
        /// The update text.
        #[arg(long)]
        message: String,
    },
    /// Show donor panels with supported children and average progress.
    Donors,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = config::CliConfig::load_or_default(&cli.config)?;
    let data_path = cli.data.unwrap_or_else(|| config.dashboard.data_path.clone());

    tracing::debug!(path = %data_path.display(), "loading seed snapshot");
    let seed = DashboardSeed::load(&data_path)?;
    let mut state = DashboardState::from_seed(seed);

    // Start in the configured role; the children command may switch again.
    let starting_role = commands::parse_role(&config.dashboard.default_role)?;
    state.switch_role(starting_role);

    match &cli.command {
        Commands::Overview { json } => commands::overview::execute(&state, *json),
        Commands::Children { role, actor } => {
            commands::children::execute(&mut state, role.as_deref(), actor.as_deref())
        }
        Commands::LogSession {
            child,
            focus,
            rating,
            goals,
            therapist,
            notes,
        } => commands::session::execute(&mut state, child, focus, *rating, goals, therapist, notes),
        Commands::FamilyUpdate { child, message } => {
            commands::update::execute(&mut state, child, message)
        }
        Commands::Donors => commands::donors::execute(&state),
    }
}
