//! Writing datasets into database tables

use super::queries::{table_exists_in, TABLE_EXISTS_SQL};
use super::schema::{log_sql, quote_identifier, Database};
use crate::dataset::Table;
use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// What to do when the destination table already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IfExists {
    /// Refuse to write
    Fail,
    /// Drop and recreate the table
    #[default]
    Replace,
    /// Insert after the existing rows
    Append,
}

impl fmt::Display for IfExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IfExists::Fail => "fail",
            IfExists::Replace => "replace",
            IfExists::Append => "append",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for IfExists {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(IfExists::Fail),
            "replace" => Ok(IfExists::Replace),
            "append" => Ok(IfExists::Append),
            other => Err(format!(
                "invalid if-exists mode '{}' (expected fail, replace or append)",
                other
            )),
        }
    }
}

fn create_table_sql(table: &Table, name: &str) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("{} {}", quote_identifier(&c.name), c.ty.sql_type()))
        .collect();
    format!(
        "CREATE TABLE {} (\n\t{}\n)",
        quote_identifier(name),
        columns.join(",\n\t")
    )
}

fn insert_sql(table: &Table, name: &str) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect();
    let placeholders = vec!["?"; table.column_count()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(name),
        columns.join(", "),
        placeholders
    )
}

impl Database {
    /// Write every row of `table` into the table `name`.
    ///
    /// Runs in one transaction: on any error nothing is committed and the
    /// previous contents of `name` are left as they were. Returns the number
    /// of rows written.
    pub fn write_table(&mut self, table: &Table, name: &str, if_exists: IfExists) -> Result<usize> {
        let echo = self.echo;
        let tx = self.conn.transaction()?;

        log_sql(echo, TABLE_EXISTS_SQL);
        let exists = table_exists_in(&tx, name)?;
        let create = match (exists, if_exists) {
            (true, IfExists::Fail) => {
                return Err(ImportError::TableExists {
                    table: name.to_string(),
                })
            }
            (true, IfExists::Replace) => {
                let drop = format!("DROP TABLE {}", quote_identifier(name));
                log_sql(echo, &drop);
                tx.execute(&drop, [])?;
                true
            }
            (true, IfExists::Append) => false,
            (false, _) => true,
        };

        if create {
            let ddl = create_table_sql(table, name);
            log_sql(echo, &ddl);
            tx.execute(&ddl, [])?;
        }

        let insert = insert_sql(table, name);
        log_sql(echo, &insert);
        let mut written = 0;
        {
            let mut stmt = tx.prepare(&insert)?;
            for row in &table.rows {
                written += stmt.execute(rusqlite::params_from_iter(row.iter()))?;
            }
        }

        log_sql(echo, "COMMIT");
        tx.commit()?;
        info!("wrote {} rows to {} ({})", written, name, if_exists);
        Ok(written)
    }
}
