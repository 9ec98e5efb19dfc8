//! Unit tests for CLI parsing

use super::*;
use clap::Parser;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["airbnb-import"]).unwrap();

    assert_eq!(cli.data_dir, PathBuf::from("Data"));
    assert!(cli.database.is_none());
    assert!(cli.tables.is_empty());
    assert_eq!(cli.if_exists, IfExists::Replace);
    assert!(!cli.echo);
    assert!(!cli.json);
}

#[test]
fn test_repeated_tables() {
    let cli = Cli::try_parse_from([
        "airbnb-import",
        "-t",
        "calendar",
        "--table",
        "listings",
        "--if-exists",
        "append",
    ])
    .unwrap();

    assert_eq!(cli.tables, vec![Dataset::Calendar, Dataset::Listings]);
    assert_eq!(cli.if_exists, IfExists::Append);
}

#[test]
fn test_database_url_argument() {
    let cli = Cli::try_parse_from(["airbnb-import", "--database", "sqlite::memory:"]).unwrap();
    assert_eq!(cli.database, Some(DatabaseUrl::Memory));
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Cli::try_parse_from(["airbnb-import", "-t", "hosts"]).is_err());
    assert!(Cli::try_parse_from(["airbnb-import", "--database", "postgresql://localhost/x"]).is_err());
    assert!(Cli::try_parse_from(["airbnb-import", "--if-exists", "merge"]).is_err());
}
