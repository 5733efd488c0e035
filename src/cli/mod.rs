//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Database selection shared by every command
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// SQLite database file (or set `CLASS_ROSTER_DATABASE` / `REAL_ESTATE_DATABASE`).
    #[clap(long, short = 'd')]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum RosterCmd {
    /// Drop and recreate the students table with the fixed roster.
    Seed {
        #[clap(flatten)]
        db: DatabaseArgs,
    },

    /// Ask for a student's name on stdin and print their favorite food.
    Ask {
        #[clap(flatten)]
        db: DatabaseArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum EstateCmd {
    /// Replace the properties table with the contents of a CSV file.
    Import {
        /// CSV file to load (or set `PATH_TO_CSV`).
        csv: Option<PathBuf>,

        #[clap(flatten)]
        db: DatabaseArgs,
    },

    /// Print the rounded average sale price for each property type.
    Analyze {
        #[clap(flatten)]
        db: DatabaseArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "roster-realty", about = "Class roster and real-estate database demos")]
pub struct App {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Class roster: seed the students table and look students up
    Roster {
        #[clap(subcommand)]
        cmd: RosterCmd,
    },

    /// Real-estate data: import sales from CSV and analyze prices
    Estate {
        #[clap(subcommand)]
        cmd: EstateCmd,
    },
}
