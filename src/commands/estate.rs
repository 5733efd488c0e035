//! Real-estate import and analysis commands

use crate::{
    config::DatabaseConfig,
    storage::{Database, PriceByType},
    Result,
};
use std::{fs::File, io::BufReader, path::Path};
use tracing::info;

/// Handle `estate import`; returns the number of rows loaded
pub fn handle_import(config: &DatabaseConfig, csv_path: &Path) -> Result<usize> {
    let file = File::open(csv_path)?;
    let mut db = Database::open(config)?;

    info!(csv = %csv_path.display(), "importing properties");
    let rows = db.import_csv(BufReader::new(file))?;

    println!("✓ Table created and {} properties inserted", rows);
    Ok(rows)
}

/// Handle `estate analyze`
pub fn handle_analyze(config: &DatabaseConfig, as_json: bool) -> Result<()> {
    let db = Database::open_existing(config)?;
    let summary = db.average_price_by_type()?;
    println!("{}", render_price_summary(&summary, as_json)?);
    Ok(())
}

/// Format the average-price summary as text lines or a JSON array
pub fn render_price_summary(summary: &[PriceByType], as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    if summary.is_empty() {
        return Ok("No properties imported".to_string());
    }

    Ok(summary
        .iter()
        .map(|row| format!("{}: {}", row.property_type, row.average_price))
        .collect::<Vec<_>>()
        .join("\n"))
}
