//! CLI argument definitions and parsing.

use crate::{
    dataset::Dataset,
    storage::{DatabaseUrl, IfExists},
};
use clap::Parser;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Load the Airbnb CSV exports into a database, replacing the target tables.
#[derive(Debug, Parser)]
#[clap(name = "airbnb-import", about = "Seed a database from the Airbnb CSV exports")]
pub struct Cli {
    /// Directory holding calendar.csv, listings.csv and reviews.csv.
    #[clap(long, default_value = "Data")]
    pub data_dir: PathBuf,

    /// Destination database, e.g. `sqlite://airbnb_project.db`
    /// (or set `AIRBNB_IMPORT_DATABASE_URL`).
    #[clap(long, short = 'd')]
    pub database: Option<DatabaseUrl>,

    /// Dataset to write (repeatable): `-t reviews -t calendar`. Defaults to reviews.
    #[clap(long = "table", short = 't')]
    pub tables: Vec<Dataset>,

    /// What to do when a destination table already exists.
    #[clap(long, default_value_t = IfExists::Replace)]
    pub if_exists: IfExists,

    /// Log every SQL statement as it is executed.
    #[clap(long)]
    pub echo: bool,

    /// Print the run summary as JSON.
    #[clap(long)]
    pub json: bool,

    /// Print the shape of every loaded dataset.
    #[clap(long, short)]
    pub verbose: bool,
}
