//! Roster seeding, lookups, and row-level reads

use super::{
    models::*,
    schema::{Database, CREATE_STUDENTS, DROP_STUDENTS},
};
use crate::error::Result;
use rusqlite::{params, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, info};

/// Rows written by [`Database::seed_students`]
pub const SEED_STUDENTS: [(&str, &str); 3] = [
    ("Victor", "Chicken"),
    ("Esan", "Rice"),
    ("Pelumi", "Beans"),
];

impl Database {
    /// Drop and recreate the `students` table, then insert the fixed roster.
    ///
    /// Runs as a single transaction; returns the number of rows inserted.
    pub fn seed_students(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(DROP_STUDENTS, [])?;
        tx.execute(CREATE_STUDENTS, [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO students (name, favorite_food) VALUES (?1, ?2)")?;
            for (name, food) in SEED_STUDENTS {
                stmt.execute(params![name, food])?;
            }
        }
        tx.commit()?;

        info!(rows = SEED_STUDENTS.len(), "seeded students table");
        Ok(SEED_STUDENTS.len())
    }

    /// Look up the first student with an exact name match.
    ///
    /// A miss is `Ok(None)`; only connection or query failures are errors.
    pub fn find_student(&self, name: &str) -> Result<Option<StudentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, favorite_food FROM students WHERE name = ?1 ORDER BY id LIMIT 1",
        )?;

        let result = stmt.query_row(params![name], |row| {
            Ok(StudentRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                favorite_food: row.get(2)?,
            })
        });

        match result {
            Ok(student) => Ok(Some(student)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                debug!(student = name, "no matching student");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Number of rows currently in `properties`
    pub fn count_properties(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM properties", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// All imported properties in insertion order
    pub fn list_properties(&self) -> Result<Vec<PropertyRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT street_address, city, zip_code, state,
                    number_of_beds, number_of_baths, square_feet,
                    property_type, sale_date, sale_price, latitude, longitude
             FROM properties
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], row_to_property)?;

        let mut properties = Vec::new();
        for row in rows {
            properties.push(row?);
        }
        Ok(properties)
    }
}

fn row_to_property(row: &Row) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        street_address: row.get(0)?,
        city: row.get(1)?,
        zip_code: row.get(2)?,
        state: row.get(3)?,
        number_of_beds: row.get(4)?,
        number_of_baths: row.get(5)?,
        square_feet: row.get(6)?,
        property_type: row.get(7)?,
        sale_date: row.get(8)?,
        sale_price: row.get(9)?,
        latitude: decimal_column(row, 10)?,
        longitude: decimal_column(row, 11)?,
    })
}

fn decimal_column(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
