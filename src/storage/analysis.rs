//! Aggregate queries over imported properties

use super::{models::*, schema::Database};
use crate::error::Result;

impl Database {
    /// Average sale price per property type, ordered by type name.
    ///
    /// The mean is computed by SQLite and rounded with its `ROUND()`, which
    /// rounds halves away from zero (`1.5 -> 2`, `-1.5 -> -2`).
    pub fn average_price_by_type(&self) -> Result<Vec<PriceByType>> {
        let mut stmt = self.conn.prepare(
            "SELECT property_type, ROUND(AVG(sale_price))
             FROM properties
             GROUP BY property_type
             ORDER BY property_type",
        )?;

        let rows = stmt.query_map([], |row| {
            let average: f64 = row.get(1)?;
            Ok(PriceByType {
                property_type: row.get(0)?,
                average_price: average as i64,
            })
        })?;

        let mut summary = Vec::new();
        for row in rows {
            summary.push(row?);
        }
        Ok(summary)
    }
}
