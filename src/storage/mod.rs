//! Storage layer for the roster and real-estate flows
//!
//! This module wraps a single SQLite connection, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Connection management and table definitions
//! - `queries`: Roster seeding and lookups
//! - `import`: Bulk CSV loading into the `properties` table
//! - `analysis`: Aggregate queries over imported properties

pub mod analysis;
pub mod import;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::Database;
