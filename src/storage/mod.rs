//! Storage layer for the importer
//!
//! This module wraps the SQLite destination database:
//! - `url`: Connection descriptors
//! - `schema`: Database connection management
//! - `sink`: Writing datasets into tables
//! - `queries`: Read-only table inspection

pub mod queries;
pub mod schema;
pub mod sink;
pub mod url;


pub use schema::Database;
pub use sink::IfExists;
pub use url::DatabaseUrl;
