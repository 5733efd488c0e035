//! Database connection and table definitions

use crate::config::DatabaseConfig;
use crate::error::{RealtyError, Result};
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

pub(crate) const DROP_STUDENTS: &str = "DROP TABLE IF EXISTS students";

pub(crate) const CREATE_STUDENTS: &str = "CREATE TABLE students (
    id integer PRIMARY KEY AUTOINCREMENT,
    name varchar,
    favorite_food varchar
)";

pub(crate) const DROP_PROPERTIES: &str = "DROP TABLE IF EXISTS properties";

// SQLite has no fixed-point type: latitude/longitude hold canonical decimal text.
pub(crate) const CREATE_PROPERTIES: &str = "CREATE TABLE properties (
    id integer PRIMARY KEY AUTOINCREMENT,
    street_address varchar,
    city varchar,
    zip_code varchar,
    state varchar,
    number_of_beds integer,
    number_of_baths integer,
    square_feet integer,
    property_type varchar,
    sale_date timestamp,
    sale_price integer,
    latitude text,
    longitude text
)";

/// An open connection for one flow invocation.
///
/// The connection is closed when the value is dropped, on success and on
/// every error path.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    /// Open (creating if needed) the database file named by `config`
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let path = config.path();
        let connection_error = |source: rusqlite::Error| RealtyError::Connection {
            target: path.display().to_string(),
            source,
        };

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(connection_error)?;
        // Surface unreadable or non-database files here rather than at first query
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(connection_error)?;

        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    /// Open a database file that must already exist.
    ///
    /// Used by the read-only flows so a mistyped path fails as a connection
    /// error instead of leaving an empty database behind.
    pub fn open_existing(config: &DatabaseConfig) -> Result<Self> {
        let path = config.path();
        let connection_error = |source: rusqlite::Error| RealtyError::Connection {
            target: path.display().to_string(),
            source,
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(connection_error)?;
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(connection_error)?;

        debug!(path = %path.display(), "opened existing database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| RealtyError::Connection {
            target: ":memory:".to_string(),
            source,
        })?;
        Ok(Self { conn })
    }

    /// Whether a table with the given name exists
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
