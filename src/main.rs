//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::{anyhow, Context};
use clap::Parser;
use roster_realty::{
    cli::{App, Commands, EstateCmd, RosterCmd},
    commands::{
        estate::{handle_analyze, handle_import},
        roster::{handle_ask, handle_seed},
    },
    config::resolve_csv_path,
    DatabaseConfig, Flow,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_tracing(app.debug)?;

    match app.command {
        Commands::Roster { cmd } => match cmd {
            RosterCmd::Seed { db } => {
                let config = DatabaseConfig::resolve(db.database, Flow::Roster)?;
                handle_seed(&config).context("Seeding the students table failed")?
            }
            RosterCmd::Ask { db } => {
                let config = DatabaseConfig::resolve(db.database, Flow::Roster)?;
                handle_ask(&config).context("Student lookup failed")?
            }
        },

        Commands::Estate { cmd } => match cmd {
            EstateCmd::Import { csv, db } => {
                let csv_path = resolve_csv_path(csv)?;
                let config = DatabaseConfig::resolve(db.database, Flow::Estate)?;
                handle_import(&config, &csv_path)
                    .with_context(|| format!("Importing {} failed", csv_path.display()))?;
            }
            EstateCmd::Analyze { db, json } => {
                let config = DatabaseConfig::resolve(db.database, Flow::Estate)?;
                handle_analyze(&config, json).context("Price analysis failed")?
            }
        },
    }

    Ok(())
}
