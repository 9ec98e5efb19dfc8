//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let import_error = ImportError::from(io_error);

    match import_error {
        ImportError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_sqlite_error_conversion() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let sqlite_error = conn.execute("SELECT * FROM missing_table", []).unwrap_err();
    let import_error = ImportError::from(sqlite_error);

    match import_error {
        ImportError::Sqlite(_) => (),
        _ => panic!("Expected Sqlite error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let import_error = ImportError::from(json_error);

    match import_error {
        ImportError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_ragged_row_message() {
    let error = ImportError::RaggedRow {
        path: PathBuf::from("Data/reviews.csv"),
        line: 4,
        expected: 3,
        found: 5,
    };

    let error_string = error.to_string();
    assert!(error_string.contains("Data/reviews.csv"));
    assert!(error_string.contains("line 4"));
    assert!(error_string.contains("expected 3 fields, found 5"));
}

#[test]
fn test_unsupported_scheme_message() {
    let error = ImportError::UnsupportedScheme {
        scheme: "postgresql".to_string(),
    };

    assert!(error.to_string().contains("postgresql"));
    assert!(error.to_string().contains("sqlite"));
}

#[test]
fn test_error_debug_format() {
    let error = ImportError::TableExists {
        table: "reviews".to_string(),
    };

    let debug_string = format!("{:?}", error);
    assert!(debug_string.contains("TableExists"));
    assert!(debug_string.contains("reviews"));
}
