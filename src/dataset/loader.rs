//! CSV file loading.

use super::infer::{convert_owned, infer_column_type};
use super::{Column, Dataset, Table};
use crate::error::{ImportError, Result};
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// All three datasets, loaded.
#[derive(Debug, Clone)]
pub struct LoadedDatasets {
    pub calendar: Table,
    pub listings: Table,
    pub reviews: Table,
}

impl LoadedDatasets {
    pub fn get(&self, dataset: Dataset) -> &Table {
        match dataset {
            Dataset::Calendar => &self.calendar,
            Dataset::Listings => &self.listings,
            Dataset::Reviews => &self.reviews,
        }
    }
}

/// Load calendar, listings and reviews from `data_dir`, in that order.
///
/// Stops at the first file that cannot be read.
pub fn load_all(data_dir: &Path) -> Result<LoadedDatasets> {
    Ok(LoadedDatasets {
        calendar: load_dataset(data_dir, Dataset::Calendar)?,
        listings: load_dataset(data_dir, Dataset::Listings)?,
        reviews: load_dataset(data_dir, Dataset::Reviews)?,
    })
}

pub fn load_dataset(data_dir: &Path, dataset: Dataset) -> Result<Table> {
    load_csv(&data_dir.join(dataset.file_name()))
}

/// Read a CSV file with a header row into a [`Table`].
///
/// Short rows are padded with nulls; long rows are rejected.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(ImportError::EmptyHeader {
                path: path.to_path_buf(),
            })
        }
    };
    let names = column_names(header.iter());
    let width = names.len();

    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in records {
        let record = record?;
        if record.len() > width {
            return Err(ragged(path, &record, width));
        }
        let mut row: Vec<Option<String>> = record.iter().map(|s| Some(s.to_string())).collect();
        row.resize(width, None);
        raw_rows.push(row);
    }

    let columns: Vec<Column> = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let ty = infer_column_type(raw_rows.iter().map(|r| r[idx].as_deref()));
            debug!("column `{}` in {} inferred as {:?}", name, path.display(), ty);
            Column { name, ty }
        })
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|raw| {
            raw.into_iter()
                .zip(&columns)
                .map(|(cell, col)| convert_owned(cell, col.ty))
                .collect()
        })
        .collect();

    let table = Table { columns, rows };
    info!(
        "loaded {}: {} rows x {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

fn ragged(path: &Path, record: &csv::StringRecord, expected: usize) -> ImportError {
    ImportError::RaggedRow {
        path: PathBuf::from(path),
        line: record.position().map(|p| p.line()).unwrap_or(0),
        expected,
        found: record.len(),
    }
}

/// Trim header names, name blank headers `Unnamed: <idx>` and suffix
/// duplicates with `.1`, `.2`, ...
///
/// Duplicates are detected ASCII case-insensitively, as SQLite compares
/// column names.
fn column_names<'a, I>(header: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();

    for (idx, raw) in header.into_iter().enumerate() {
        let trimmed = raw.trim_start_matches('\u{feff}').trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            trimmed.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name.to_ascii_lowercase()) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.to_ascii_lowercase());
        names.push(name);
    }

    names
}

#[cfg(test)]
mod header_tests {
    use super::column_names;

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let names = column_names(["id", "id", "date", "id"]);
        assert_eq!(names, vec!["id", "id.1", "date", "id.2"]);
    }

    #[test]
    fn test_duplicates_differing_in_case_are_suffixed() {
        let names = column_names(["ID", "id", "date", "Id"]);
        assert_eq!(names, vec!["ID", "id.1", "date", "Id.2"]);
    }

    #[test]
    fn test_suffix_skips_names_already_taken() {
        let names = column_names(["a", "A.1", "a"]);
        assert_eq!(names, vec!["a", "A.1", "a.2"]);
    }

    #[test]
    fn test_blank_header_is_named_by_index() {
        let names = column_names(["", "comments", " "]);
        assert_eq!(names, vec!["Unnamed: 0", "comments", "Unnamed: 2"]);
    }

    #[test]
    fn test_bom_and_whitespace_are_stripped() {
        let names = column_names(["\u{feff}listing_id", " date "]);
        assert_eq!(names, vec!["listing_id", "date"]);
    }
}
