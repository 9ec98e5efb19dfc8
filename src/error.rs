//! Error types for the Airbnb CSV importer

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV file {} has no header row", path.display())]
    EmptyHeader { path: PathBuf },

    #[error(
        "CSV file {} line {line}: expected {expected} fields, found {found}",
        path.display()
    )]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Unsupported database scheme: {scheme} (only sqlite is available)")]
    UnsupportedScheme { scheme: String },

    #[error("Invalid database URL: {url}")]
    InvalidDatabaseUrl { url: String },

    #[error("Table {table} already exists")]
    TableExists { table: String },

    #[error("Unknown dataset: {name} (expected calendar, listings or reviews)")]
    UnknownDataset { name: String },

    #[error("Could not determine a default database location")]
    NoDatabasePath,
}
