//! In-memory tabular datasets read from the Airbnb CSV exports.
//!
//! - `infer`: per-column type inference over raw cells
//! - `loader`: CSV file reading into a [`Table`]

pub mod infer;
pub mod loader;


use crate::error::ImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use loader::{load_all, load_csv, load_dataset, LoadedDatasets};

/// The three known CSV exports.
///
/// Each dataset has a fixed file name inside the data directory and a fixed
/// destination table name.
///
/// # Examples
///
/// ```rust
/// use airbnb_import::Dataset;
///
/// let reviews: Dataset = "reviews".parse().unwrap();
/// assert_eq!(reviews.file_name(), "reviews.csv");
/// assert_eq!(reviews.table_name(), "reviews");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Calendar,
    Listings,
    Reviews,
}

impl Dataset {
    /// All datasets in load order.
    pub const ALL: [Dataset; 3] = [Dataset::Calendar, Dataset::Listings, Dataset::Reviews];

    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Calendar => "calendar.csv",
            Dataset::Listings => "listings.csv",
            Dataset::Reviews => "reviews.csv",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            Dataset::Calendar => "calendar",
            Dataset::Listings => "listings",
            Dataset::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

impl FromStr for Dataset {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Ok(Dataset::Calendar),
            "listings" => Ok(Dataset::Listings),
            "reviews" => Ok(Dataset::Reviews),
            _ => Err(ImportError::UnknownDataset {
                name: s.to_string(),
            }),
        }
    }
}

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Real,
    Boolean,
    Text,
}

impl ColumnType {
    /// SQL type name used when creating the destination table.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "BIGINT",
            ColumnType::Real => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Text => "TEXT",
        }
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, ValueRef};

        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Borrowed(ValueRef::Real(*f)),
            Value::Boolean(b) => ToSqlOutput::Borrowed(ValueRef::Integer(i64::from(*b))),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

/// A rectangular dataset: every row holds exactly one value per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
