//! Command implementations for the importer

pub mod import;

#[cfg(test)]
mod tests;

use crate::{
    storage::{Database, DatabaseUrl},
    ImportError, Result, DATABASE_URL_ENV_VAR,
};
use std::env::VarError;

pub use import::{handle_import, DatasetSummary, ImportParams, ImportSummary};

/// Pick the destination database: the explicit value, then the
/// `AIRBNB_IMPORT_DATABASE_URL` environment variable, then the default file.
pub fn resolve_database_url(database: Option<DatabaseUrl>) -> Result<DatabaseUrl> {
    if let Some(url) = database {
        return Ok(url);
    }
    match std::env::var(DATABASE_URL_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        Err(VarError::NotUnicode(raw)) => Err(ImportError::InvalidDatabaseUrl {
            url: raw.to_string_lossy().into_owned(),
        }),
        _ => Ok(DatabaseUrl::File(Database::default_path()?)),
    }
}
