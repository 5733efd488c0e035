//! Class roster and real-estate database demos
//!
//! Two independent flows over an embedded SQLite database:
//!
//! - **Roster**: seed a `students` table with a fixed roster, then look a
//!   student up by name from an interactive prompt.
//! - **Real estate**: convert CSV sale records into typed rows, replace the
//!   `properties` table with them in one transaction, and report the rounded
//!   average sale price per property type.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_realty::storage::Database;
//!
//! # fn example() -> roster_realty::Result<()> {
//! let mut db = Database::open_in_memory()?;
//! db.seed_students()?;
//!
//! let victor = db.find_student("Victor")?.expect("seeded");
//! assert_eq!(victor.favorite_food, "Chicken");
//! assert!(db.find_student("Nobody")?.is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CLASS_ROSTER_DATABASE=./roster.db
//! export REAL_ESTATE_DATABASE=./estate.db
//! export PATH_TO_CSV=./Sacramentorealestatetransactions.csv
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod transform;

// Re-export commonly used types
pub use config::{DatabaseConfig, Flow};
pub use error::{RealtyError, Result};
pub use storage::{Database, PriceByType, PropertyRecord, StudentRecord};
pub use transform::{transform_row, ConversionError, RawRow};
