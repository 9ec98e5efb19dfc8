//! Airbnb CSV importer
//!
//! Reads the `calendar`, `listings` and `reviews` CSV exports from a data
//! directory and writes the selected datasets into SQLite tables of the same
//! name, replacing whatever those tables held before.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use airbnb_import::{commands::*, Dataset, DatabaseUrl, IfExists};
//! use std::path::PathBuf;
//!
//! # fn example() -> airbnb_import::Result<()> {
//! let summary = handle_import(ImportParams {
//!     data_dir: PathBuf::from("Data"),
//!     database: "sqlite://airbnb_project.db".parse()?,
//!     tables: vec![Dataset::Reviews],
//!     if_exists: IfExists::Replace,
//!     echo: false,
//! })?;
//! println!("{} reviews", summary.datasets[2].rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the destination database to avoid passing it in every run:
//! ```bash
//! export AIRBNB_IMPORT_DATABASE_URL=sqlite://airbnb_project.db
//! ```

pub mod cli;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use dataset::{Column, ColumnType, Dataset, Table, Value};
pub use error::{ImportError, Result};
pub use storage::{Database, DatabaseUrl, IfExists};

pub const DATABASE_URL_ENV_VAR: &str = "AIRBNB_IMPORT_DATABASE_URL";

/// Printed as the last line of a successful run.
pub const COMPLETION_MESSAGE: &str = "Done-zo";
