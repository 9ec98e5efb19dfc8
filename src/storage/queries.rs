//! Read-only queries against destination tables

use super::schema::{quote_identifier, Database};
use crate::error::Result;
use rusqlite::{params, Connection};

pub(crate) const TABLE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)";

pub(crate) fn table_exists_in(conn: &Connection, name: &str) -> Result<bool> {
    let exists = conn.query_row(
        TABLE_EXISTS_SQL,
        params![name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

impl Database {
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        table_exists_in(&self.conn, name)
    }

    /// Number of rows currently in `name`
    pub fn row_count(&self, name: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", quote_identifier(name)),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Column names of `name`, in declaration order
    pub fn column_names(&self, name: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?) ORDER BY cid")?;
        let names = stmt
            .query_map(params![name], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// Declared column types of `name`, in declaration order
    pub fn column_types(&self, name: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT type FROM pragma_table_info(?) ORDER BY cid")?;
        let types = stmt
            .query_map(params![name], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(types)
    }
}
