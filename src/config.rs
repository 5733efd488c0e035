//! Resolution of database locations and input paths.
//!
//! Each value is taken from an explicit CLI argument first, then from an
//! environment variable, then (for databases only) from a default file in the
//! user data directory.

use crate::error::{RealtyError, Result};
use std::path::{Path, PathBuf};


pub const ROSTER_DB_ENV_VAR: &str = "CLASS_ROSTER_DATABASE";
pub const ESTATE_DB_ENV_VAR: &str = "REAL_ESTATE_DATABASE";
pub const CSV_PATH_ENV_VAR: &str = "PATH_TO_CSV";

const APP_DIR: &str = "roster-realty";

/// Which flow a database belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Roster,
    Estate,
}

impl Flow {
    pub fn env_var(&self) -> &'static str {
        match self {
            Flow::Roster => ROSTER_DB_ENV_VAR,
            Flow::Estate => ESTATE_DB_ENV_VAR,
        }
    }

    fn default_file(&self) -> &'static str {
        match self {
            Flow::Roster => "class_roster.db",
            Flow::Estate => "real_estate.db",
        }
    }
}

/// Location of the SQLite file a flow connects to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    path: PathBuf,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve from `--database`, then the flow's env var, then the data directory
    pub fn resolve(explicit: Option<PathBuf>, flow: Flow) -> Result<Self> {
        Self::resolve_with(explicit, flow.env_var(), flow.default_file())
    }

    pub(crate) fn resolve_with(
        explicit: Option<PathBuf>,
        env_var: &str,
        default_file: &str,
    ) -> Result<Self> {
        if let Some(path) = explicit.or_else(|| non_empty_env(env_var).map(PathBuf::from)) {
            return Ok(Self::new(path));
        }

        let data_dir = dirs::data_dir().ok_or_else(|| RealtyError::MissingConfig {
            what: "Database path".to_string(),
            env_var: env_var.to_string(),
        })?;
        Ok(Self::new(data_dir.join(APP_DIR).join(default_file)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the CSV input from the positional argument or `PATH_TO_CSV`
pub fn resolve_csv_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_csv_path_with(explicit, CSV_PATH_ENV_VAR)
}

pub(crate) fn resolve_csv_path_with(explicit: Option<PathBuf>, env_var: &str) -> Result<PathBuf> {
    explicit
        .or_else(|| non_empty_env(env_var).map(PathBuf::from))
        .ok_or_else(|| RealtyError::MissingConfig {
            what: "CSV path".to_string(),
            env_var: env_var.to_string(),
        })
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}
