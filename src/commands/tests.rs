//! Unit tests for the import command

use super::*;
use crate::dataset::Dataset;
use crate::storage::IfExists;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed_data_dir(dir: &Path) {
    fs::write(
        dir.join("calendar.csv"),
        "listing_id,date,available,price\n241032,2016-01-04,t,$85.00\n241032,2016-01-05,t,$85.00\n",
    )
    .unwrap();
    fs::write(
        dir.join("listings.csv"),
        "id,name,accommodates\n241032,Stylish Queen Anne Apartment,4\n",
    )
    .unwrap();
    fs::write(
        dir.join("reviews.csv"),
        "id,comments,date\n38917982,Cute and cozy place,2015-07-19\n39087409,\"Kelly has a great room, very central\",2015-07-20\n39820030,,2015-07-26\n",
    )
    .unwrap();
}

fn params(data_dir: &Path, db_path: &Path, tables: Vec<Dataset>) -> ImportParams {
    ImportParams {
        data_dir: data_dir.to_path_buf(),
        database: DatabaseUrl::File(db_path.to_path_buf()),
        tables,
        if_exists: IfExists::Replace,
        echo: false,
    }
}

#[test]
fn test_import_writes_reviews_only_by_default() {
    let dir = TempDir::new().unwrap();
    seed_data_dir(dir.path());
    let db_path = dir.path().join("airbnb.db");

    let summary = handle_import(params(dir.path(), &db_path, vec![])).unwrap();

    assert_eq!(summary.datasets.len(), 3);
    let reviews = &summary.datasets[2];
    assert_eq!(reviews.dataset, Dataset::Reviews);
    assert_eq!(reviews.rows, 3);
    assert_eq!(reviews.written, Some(3));
    assert_eq!(summary.datasets[0].written, None);
    assert_eq!(summary.datasets[1].written, None);

    let db = Database::open(&DatabaseUrl::File(db_path)).unwrap();
    assert_eq!(db.row_count("reviews").unwrap(), 3);
    assert!(!db.table_exists("calendar").unwrap());
    assert!(!db.table_exists("listings").unwrap());
}

#[test]
fn test_import_selected_tables() {
    let dir = TempDir::new().unwrap();
    seed_data_dir(dir.path());
    let db_path = dir.path().join("airbnb.db");

    let summary = handle_import(params(
        dir.path(),
        &db_path,
        vec![Dataset::Calendar, Dataset::Listings],
    ))
    .unwrap();
    assert_eq!(summary.datasets[0].written, Some(2));
    assert_eq!(summary.datasets[1].written, Some(1));
    assert_eq!(summary.datasets[2].written, None);

    let db = Database::open(&DatabaseUrl::File(db_path)).unwrap();
    assert_eq!(db.row_count("calendar").unwrap(), 2);
    assert_eq!(db.row_count("listings").unwrap(), 1);
    assert!(!db.table_exists("reviews").unwrap());
}

#[test]
fn test_import_missing_file_leaves_database_untouched() {
    let dir = TempDir::new().unwrap();
    seed_data_dir(dir.path());
    fs::remove_file(dir.path().join("listings.csv")).unwrap();
    let db_path = dir.path().join("airbnb.db");

    let result = handle_import(params(dir.path(), &db_path, vec![Dataset::Reviews]));
    assert!(result.is_err());
    assert!(!db_path.exists());
}

#[test]
fn test_summary_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    seed_data_dir(dir.path());
    let db_path = dir.path().join("airbnb.db");

    let summary = handle_import(params(dir.path(), &db_path, vec![])).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["if_exists"], "replace");
    assert_eq!(json["datasets"][2]["dataset"], "reviews");
    assert_eq!(json["datasets"][2]["written"], 3);
    assert!(json["datasets"][0]["written"].is_null());
}

#[test]
fn test_resolve_database_url_prefers_explicit_value() {
    let url = resolve_database_url(Some(DatabaseUrl::Memory)).unwrap();
    assert_eq!(url, DatabaseUrl::Memory);
}
