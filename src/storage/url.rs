//! Database connection descriptors.

use crate::error::{ImportError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const MEMORY: &str = ":memory:";

/// Where the destination database lives.
///
/// Parsed from `sqlite://<path>`, `sqlite:<path>`, `sqlite::memory:` or a
/// bare filesystem path. Any other `scheme://` is rejected.
///
/// # Examples
///
/// ```rust
/// use airbnb_import::DatabaseUrl;
/// use std::path::PathBuf;
///
/// let url: DatabaseUrl = "sqlite://airbnb_project.db".parse().unwrap();
/// assert_eq!(url, DatabaseUrl::File(PathBuf::from("airbnb_project.db")));
/// assert!("postgresql://localhost:5432/airbnb_project".parse::<DatabaseUrl>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    Memory,
    File(PathBuf),
}

impl DatabaseUrl {
    fn from_location(location: &str, original: &str) -> Result<Self> {
        match location {
            "" => Err(ImportError::InvalidDatabaseUrl {
                url: original.to_string(),
            }),
            MEMORY => Ok(DatabaseUrl::Memory),
            path => Ok(DatabaseUrl::File(PathBuf::from(path))),
        }
    }
}

impl FromStr for DatabaseUrl {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("sqlite:") {
            let location = rest.strip_prefix("//").unwrap_or(rest);
            return Self::from_location(location, s);
        }

        if let Some((scheme, _)) = s.split_once("://") {
            return Err(ImportError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }

        Self::from_location(s, s)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseUrl::Memory => write!(f, "sqlite::memory:"),
            DatabaseUrl::File(path) => write!(f, "sqlite://{}", path.display()),
        }
    }
}
