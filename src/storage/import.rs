//! Bulk loading of CSV property data

use super::schema::{Database, CREATE_PROPERTIES, DROP_PROPERTIES};
use crate::error::{RealtyError, Result};
use crate::transform::{transform_row, RawRow, CSV_COLUMNS};
use rusqlite::{params, Transaction};
use std::io::Read;
use tracing::{debug, info, warn};

const INSERT_PROPERTY: &str = "INSERT INTO properties (
    street_address,
    city,
    zip_code,
    state,
    number_of_beds,
    number_of_baths,
    square_feet,
    property_type,
    sale_date,
    sale_price,
    latitude,
    longitude
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

impl Database {
    /// Replace the `properties` table with the given rows.
    ///
    /// The drop, the create, and every insert share one transaction. The
    /// first row that fails to convert or insert aborts the run: everything is
    /// rolled back, the previous table survives, and the error carries the
    /// 1-based row number. Returns the number of rows committed.
    pub fn load_properties<I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<RawRow>>,
    {
        let tx = self.conn.transaction()?;

        match replace_properties(&tx, rows) {
            Ok(inserted) => {
                tx.commit()?;
                info!(rows = inserted, "imported properties");
                Ok(inserted)
            }
            Err(e) => {
                warn!(error = %e, "import aborted, rolling back");
                Err(keep_import_error(e, tx.rollback()))
            }
        }
    }

    /// Read a headed CSV stream and load it with [`Database::load_properties`].
    ///
    /// The header is checked before anything is written.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&'static str> = CSV_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(RealtyError::InvalidHeader { missing });
        }

        let rows = csv_reader.into_records().map(|record| -> Result<RawRow> {
            let record = record?;
            Ok(headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect::<RawRow>())
        });

        self.load_properties(rows)
    }
}

/// The import failure wins over a failed rollback; the rollback error is only logged.
pub(crate) fn keep_import_error(
    error: RealtyError,
    rollback: rusqlite::Result<()>,
) -> RealtyError {
    if let Err(rollback_error) = rollback {
        warn!(error = %rollback_error, "rollback after failed import also failed");
    }
    error
}

fn replace_properties<I>(tx: &Transaction, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<RawRow>>,
{
    tx.execute(DROP_PROPERTIES, [])?;
    tx.execute(CREATE_PROPERTIES, [])?;

    let mut stmt = tx.prepare(INSERT_PROPERTY)?;
    let mut inserted = 0;

    for (idx, raw) in rows.into_iter().enumerate() {
        let row = idx as u64 + 1;
        let raw = raw?;
        let record =
            transform_row(&raw).map_err(|source| RealtyError::Conversion { row, source })?;

        stmt.execute(params![
            record.street_address,
            record.city,
            record.zip_code,
            record.state,
            record.number_of_beds,
            record.number_of_baths,
            record.square_feet,
            record.property_type,
            record.sale_date,
            record.sale_price,
            record.latitude.to_string(),
            record.longitude.to_string(),
        ])
        .map_err(|source| RealtyError::Insert { row, source })?;

        debug!(row, property_type = %record.property_type, "inserted property");
        inserted += 1;
    }

    Ok(inserted)
}
