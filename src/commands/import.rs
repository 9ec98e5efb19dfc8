//! Load the CSV exports and write the selected datasets to the database.

use crate::{
    dataset::{load_all, Dataset},
    storage::{Database, DatabaseUrl, IfExists},
    Result,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Parameters for an import run
#[derive(Debug, Clone)]
pub struct ImportParams {
    pub data_dir: PathBuf,
    pub database: DatabaseUrl,
    pub tables: Vec<Dataset>,
    pub if_exists: IfExists,
    pub echo: bool,
}

/// Shape of one loaded dataset and how many rows were written from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub dataset: Dataset,
    pub rows: usize,
    pub columns: Vec<String>,
    /// `None` when the dataset was loaded but not written
    pub written: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub database: String,
    pub if_exists: IfExists,
    pub datasets: Vec<DatasetSummary>,
}

/// Run one import.
///
/// All three datasets are loaded before the database is opened, so an
/// unreadable file aborts the run without touching the database. Only the
/// datasets in `params.tables` are written, each to the table of the same
/// name.
pub fn handle_import(params: ImportParams) -> Result<ImportSummary> {
    info!("loading datasets from {}", params.data_dir.display());
    let loaded = load_all(&params.data_dir)?;

    let tables = if params.tables.is_empty() {
        vec![Dataset::Reviews]
    } else {
        params.tables.clone()
    };

    let mut db = Database::open(&params.database)?.with_echo(params.echo);

    let mut datasets = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        let table = loaded.get(dataset);
        let written = if tables.contains(&dataset) {
            Some(db.write_table(table, dataset.table_name(), params.if_exists)?)
        } else {
            None
        };

        datasets.push(DatasetSummary {
            dataset,
            rows: table.row_count(),
            columns: table.column_names().iter().map(|s| s.to_string()).collect(),
            written,
        });
    }

    Ok(ImportSummary {
        database: params.database.to_string(),
        if_exists: params.if_exists,
        datasets,
    })
}
