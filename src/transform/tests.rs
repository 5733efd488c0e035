//! Unit tests for row conversion

use super::*;
use chrono::{Datelike, Timelike};

fn sample_row() -> RawRow {
    [
        ("street", "3526 HIGH ST"),
        ("city", "SACRAMENTO"),
        ("zip", "95838"),
        ("state", "CA"),
        ("beds", "3"),
        ("baths", "2"),
        ("sq__ft", "1122"),
        ("type", "Residential"),
        ("sale_date", "Wed May 21 00:00:00 EDT 2008"),
        ("price", "89921"),
        ("latitude", "40.7128"),
        ("longitude", "-74.0060"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn with(column: &str, value: &str) -> RawRow {
    let mut row = sample_row();
    row.insert(column.to_string(), value.to_string());
    row
}

#[test]
fn test_transform_maps_every_column() {
    let record = transform_row(&sample_row()).unwrap();

    assert_eq!(record.street_address, "3526 HIGH ST");
    assert_eq!(record.city, "SACRAMENTO");
    assert_eq!(record.zip_code, "95838");
    assert_eq!(record.state, "CA");
    assert_eq!(record.number_of_beds, 3);
    assert_eq!(record.number_of_baths, 2);
    assert_eq!(record.square_feet, 1122);
    assert_eq!(record.property_type, "Residential");
    assert_eq!(record.sale_price, 89921);
}

#[test]
fn test_coordinates_are_exact_decimals() {
    let record = transform_row(&sample_row()).unwrap();

    assert_eq!(record.latitude, Decimal::from_str("40.7128").unwrap());
    assert_eq!(record.longitude, Decimal::from_str("-74.0060").unwrap());
    assert_eq!(record.latitude.to_string(), "40.7128");
    assert_eq!(record.longitude.to_string(), "-74.0060");
}

#[test]
fn test_zip_code_keeps_leading_zeros() {
    let record = transform_row(&with("zip", "02134")).unwrap();
    assert_eq!(record.zip_code, "02134");
}

#[test]
fn test_numeric_fields_tolerate_surrounding_whitespace() {
    let record = transform_row(&with("beds", " 4 ")).unwrap();
    assert_eq!(record.number_of_beds, 4);
}

#[test]
fn test_non_numeric_integer_columns_are_rejected() {
    for column in ["beds", "baths", "sq__ft", "price"] {
        let err = transform_row(&with(column, "three")).unwrap_err();
        assert_eq!(err.column(), column);
        assert_eq!(err.value(), Some("three"));
        assert!(matches!(err, ConversionError::InvalidValue { expected: "integer", .. }));
    }
}

#[test]
fn test_fractional_integer_is_rejected() {
    let err = transform_row(&with("baths", "1.5")).unwrap_err();
    assert_eq!(err.column(), "baths");
}

#[test]
fn test_integer_overflow_is_rejected() {
    let err = transform_row(&with("price", "99999999999")).unwrap_err();
    assert_eq!(err.column(), "price");
}

#[test]
fn test_bad_coordinate_is_rejected() {
    let err = transform_row(&with("latitude", "north")).unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidValue {
            column: "latitude",
            value: "north".to_string(),
            expected: "decimal",
        }
    );
}

#[test]
fn test_missing_column_is_rejected() {
    let mut row = sample_row();
    row.remove("sq__ft");

    let err = transform_row(&row).unwrap_err();
    assert_eq!(err, ConversionError::MissingColumn { column: "sq__ft" });
    assert_eq!(err.value(), None);
}

#[test]
fn test_unparseable_date_is_rejected() {
    let err = transform_row(&with("sale_date", "sometime in May")).unwrap_err();
    assert_eq!(err.column(), "sale_date");
    assert_eq!(err.value(), Some("sometime in May"));
}

#[test]
fn test_error_message_names_column_and_value() {
    let err = transform_row(&with("beds", "n/a")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("beds"));
    assert!(message.contains("n/a"));
}

#[test]
fn test_sale_date_preserves_edt_offset() {
    let record = transform_row(&sample_row()).unwrap();

    assert_eq!(record.sale_date.offset().local_minus_utc(), -4 * 3600);
    assert_eq!(record.sale_date.year(), 2008);
    assert_eq!(record.sale_date.month(), 5);
    assert_eq!(record.sale_date.day(), 21);
    assert_eq!(record.sale_date.hour(), 0);
}

#[test]
fn test_parse_sale_date_abbreviations() {
    let est = parse_sale_date("Mon Jan 14 09:30:00 EST 2008").unwrap();
    assert_eq!(est.offset().local_minus_utc(), -5 * 3600);
    assert_eq!(est.hour(), 9);

    let pdt = parse_sale_date("2008-05-21 12:00:00 PDT").unwrap();
    assert_eq!(pdt.offset().local_minus_utc(), -7 * 3600);

    let utc = parse_sale_date("2008-05-21 12:00:00 UTC").unwrap();
    assert_eq!(utc.offset().local_minus_utc(), 0);
}

#[test]
fn test_parse_sale_date_numeric_offsets() {
    let rfc3339 = parse_sale_date("2008-05-21T00:00:00-04:00").unwrap();
    assert_eq!(rfc3339.offset().local_minus_utc(), -4 * 3600);

    let stored = parse_sale_date("2008-05-21 00:00:00-04:00").unwrap();
    assert_eq!(stored, rfc3339);

    let token = parse_sale_date("05/21/2008 00:00 +0530").unwrap();
    assert_eq!(token.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
}

#[test]
fn test_parse_sale_date_date_only_with_zone() {
    let date = parse_sale_date("2008-05-21 EDT").unwrap();
    assert_eq!(date.hour(), 0);
    assert_eq!(date.day(), 21);
}

#[test]
fn test_parse_sale_date_requires_zone() {
    assert!(parse_sale_date("Wed May 21 00:00:00 2008").is_none());
    assert!(parse_sale_date("2008-05-21 00:00:00").is_none());
}

#[test]
fn test_same_instant_in_different_zones() {
    let edt = parse_sale_date("Wed May 21 00:00:00 EDT 2008").unwrap();
    let utc = parse_sale_date("2008-05-21T04:00:00Z").unwrap();
    assert_eq!(edt, utc);
    assert_ne!(edt.offset(), utc.offset());
}

#[test]
fn test_csv_columns_cover_every_field() {
    let row = sample_row();
    for column in CSV_COLUMNS {
        assert!(row.contains_key(column), "missing {column}");
    }
    assert_eq!(CSV_COLUMNS.len(), 12);
}
