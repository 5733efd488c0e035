//! Conversion of raw CSV rows into typed property records.
//!
//! A raw row is the header-keyed map produced by the CSV reader. Every column
//! is mapped to exactly one [`PropertyRecord`] field; a value that cannot be
//! converted rejects the whole row with a [`ConversionError`] naming the column
//! and the offending text. Nothing is defaulted or skipped.

use crate::storage::models::PropertyRecord;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// One CSV record keyed by header name.
pub type RawRow = HashMap<String, String>;

/// Columns every import file must carry, in field order.
pub const CSV_COLUMNS: [&str; 12] = [
    "street",
    "city",
    "zip",
    "state",
    "beds",
    "baths",
    "sq__ft",
    "type",
    "sale_date",
    "price",
    "latitude",
    "longitude",
];

/// Fixed offsets for the zone abbreviations found in sale dates.
const ZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("Z", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

/// Formats that carry their own numeric offset.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%z"];

/// Formats tried once the zone token has been pulled out of the string.
const NAIVE_FORMATS: &[&str] = &[
    "%a %b %d %H:%M:%S %Y",
    "%b %d %H:%M:%S %Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Why a raw row could not become a [`PropertyRecord`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("missing column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("column `{column}`: {value:?} is not a valid {expected}")]
    InvalidValue {
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ConversionError {
    /// CSV column the failure belongs to.
    pub fn column(&self) -> &'static str {
        match self {
            ConversionError::MissingColumn { column }
            | ConversionError::InvalidValue { column, .. } => column,
        }
    }

    /// Raw text that failed to convert, if the column was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            ConversionError::MissingColumn { .. } => None,
            ConversionError::InvalidValue { value, .. } => Some(value),
        }
    }
}

/// Map and type-convert one raw CSV row.
///
/// ```rust
/// use roster_realty::transform::{transform_row, RawRow};
///
/// let row: RawRow = [
///     ("street", "3526 HIGH ST"), ("city", "SACRAMENTO"), ("zip", "95838"),
///     ("state", "CA"), ("beds", "2"), ("baths", "1"), ("sq__ft", "836"),
///     ("type", "Residential"), ("sale_date", "Wed May 21 00:00:00 EDT 2008"),
///     ("price", "59222"), ("latitude", "38.631913"), ("longitude", "-121.434879"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let record = transform_row(&row).unwrap();
/// assert_eq!(record.number_of_beds, 2);
/// assert_eq!(record.sale_price, 59222);
/// ```
pub fn transform_row(raw: &RawRow) -> Result<PropertyRecord, ConversionError> {
    Ok(PropertyRecord {
        street_address: text(raw, "street")?,
        city: text(raw, "city")?,
        zip_code: text(raw, "zip")?,
        state: text(raw, "state")?,
        number_of_beds: integer(raw, "beds")?,
        number_of_baths: integer(raw, "baths")?,
        square_feet: integer(raw, "sq__ft")?,
        property_type: text(raw, "type")?,
        sale_date: timestamp(raw, "sale_date")?,
        sale_price: integer(raw, "price")?,
        latitude: decimal(raw, "latitude")?,
        longitude: decimal(raw, "longitude")?,
    })
}

/// Parse a sale date, keeping whatever offset the text names.
///
/// Accepts RFC 3339, RFC 2822, offset-suffixed ISO forms, and free-form dates
/// with a zone token such as `Wed May 21 00:00:00 EDT 2008`. Text without any
/// zone is rejected.
pub fn parse_sale_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed);
    }
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Some(parsed);
    }

    let mut offset = None;
    let mut rest = Vec::new();
    for token in value.split_whitespace() {
        match zone_offset(token) {
            Some(found) if offset.is_none() => offset = Some(found),
            _ => rest.push(token),
        }
    }

    let naive = parse_naive(&rest.join(" "))?;
    offset?.from_local_datetime(&naive).single()
}

fn zone_offset(token: &str) -> Option<FixedOffset> {
    let upper = token.to_ascii_uppercase();
    if let Some((_, hours)) = ZONE_ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == upper) {
        return FixedOffset::east_opt(hours * 3600);
    }

    // +HHMM / -HH:MM
    let (sign, digits) = match token.as_bytes().first()? {
        b'+' => (1, &token[1..]),
        b'-' => (-1, &token[1..]),
        _ => return None,
    };
    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn field<'a>(raw: &'a RawRow, column: &'static str) -> Result<&'a str, ConversionError> {
    raw.get(column)
        .map(String::as_str)
        .ok_or(ConversionError::MissingColumn { column })
}

fn invalid(column: &'static str, value: &str, expected: &'static str) -> ConversionError {
    ConversionError::InvalidValue {
        column,
        value: value.to_string(),
        expected,
    }
}

fn text(raw: &RawRow, column: &'static str) -> Result<String, ConversionError> {
    field(raw, column).map(str::to_string)
}

fn integer(raw: &RawRow, column: &'static str) -> Result<i32, ConversionError> {
    let value = field(raw, column)?;
    value
        .trim()
        .parse()
        .map_err(|_| invalid(column, value, "integer"))
}

fn decimal(raw: &RawRow, column: &'static str) -> Result<Decimal, ConversionError> {
    let value = field(raw, column)?;
    Decimal::from_str(value.trim()).map_err(|_| invalid(column, value, "decimal"))
}

fn timestamp(raw: &RawRow, column: &'static str) -> Result<DateTime<FixedOffset>, ConversionError> {
    let value = field(raw, column)?;
    parse_sale_date(value).ok_or_else(|| invalid(column, value, "date/time with time zone"))
}
