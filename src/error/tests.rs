//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod realty_error_tests {
    use super::*;

    #[test]
    fn test_query_error_conversion() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "test_column".to_string(),
            rusqlite::types::Type::Null,
        );
        let error = RealtyError::from(db_error);

        match error {
            RealtyError::Query(_) => (),
            _ => panic!("Expected Query error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = RealtyError::from(io_error);

        match error {
            RealtyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = RealtyError::from(json_error);

        match error {
            RealtyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_connection_error_names_target() {
        let error = RealtyError::Connection {
            target: "/nowhere/roster.db".to_string(),
            source: rusqlite::Error::QueryReturnedNoRows,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Could not open database"));
        assert!(error_string.contains("/nowhere/roster.db"));
    }

    #[test]
    fn test_conversion_error_reports_row_and_column() {
        let error = RealtyError::Conversion {
            row: 7,
            source: ConversionError::InvalidValue {
                column: "beds",
                value: "three".to_string(),
                expected: "integer",
            },
        };

        let error_string = error.to_string();
        assert!(error_string.starts_with("Row 7"));
        assert!(error_string.contains("beds"));
        assert!(error_string.contains("three"));
        assert_eq!(error.row(), Some(7));
        assert_eq!(error.column(), Some("beds"));
    }

    #[test]
    fn test_insert_error_has_row_but_no_column() {
        let error = RealtyError::Insert {
            row: 3,
            source: rusqlite::Error::QueryReturnedNoRows,
        };

        assert_eq!(error.row(), Some(3));
        assert_eq!(error.column(), None);
    }

    #[test]
    fn test_invalid_header_lists_missing_columns() {
        let error = RealtyError::InvalidHeader {
            missing: vec!["sq__ft", "price"],
        };

        assert_eq!(
            error.to_string(),
            "CSV header is missing required columns: sq__ft, price"
        );
    }

    #[test]
    fn test_missing_config_error() {
        let error = RealtyError::MissingConfig {
            what: "CSV path".to_string(),
            env_var: "PATH_TO_CSV".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "CSV path not provided and PATH_TO_CSV environment variable not set"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let error = RealtyError::Conversion {
            row: 1,
            source: ConversionError::MissingColumn { column: "zip" },
        };

        let error_trait: &dyn std::error::Error = &error;
        let source = error_trait.source().expect("conversion error has a source");
        assert_eq!(source.to_string(), "missing column `zip`");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(RealtyError::InvalidHeader { missing: vec![] })
        }

        match test_function().unwrap_err() {
            RealtyError::InvalidHeader { missing } => assert!(missing.is_empty()),
            _ => panic!("Expected InvalidHeader error"),
        }
    }
}
