//! Database connection management

use super::url::DatabaseUrl;
use crate::error::{ImportError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::{debug, info};

/// Connection to the destination database
pub struct Database {
    pub(crate) conn: Connection,
    pub(crate) echo: bool,
}

impl Database {
    /// Open the database named by `url`, creating parent directories for a file
    pub fn open(url: &DatabaseUrl) -> Result<Self> {
        let conn = match url {
            DatabaseUrl::Memory => Connection::open_in_memory()?,
            DatabaseUrl::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Connection::open(path)?
            }
        };
        info!("connected to {}", url);

        Ok(Self { conn, echo: false })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(&DatabaseUrl::Memory)
    }

    /// Log every executed SQL statement at info level instead of debug
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Default database file, under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or(ImportError::NoDatabasePath)?;
        Ok(data_dir.join("airbnb-import").join("airbnb_project.db"))
    }
}

/// Log an executed statement, at info level when echoing
pub(crate) fn log_sql(echo: bool, sql: &str) {
    if echo {
        info!(target: "airbnb_import::sql", "{}", sql);
    } else {
        debug!(target: "airbnb_import::sql", "{}", sql);
    }
}

/// Quote an identifier for use in SQL, doubling embedded quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
