//! Entry point: parse CLI, load the exports, write the selected tables.

use airbnb_import::{
    cli::Cli,
    commands::{handle_import, resolve_database_url, ImportParams},
    COMPLETION_MESSAGE,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.echo || cli.verbose { "info" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let database = resolve_database_url(cli.database).context("resolving destination database")?;

    let summary = handle_import(ImportParams {
        data_dir: cli.data_dir.clone(),
        database,
        tables: cli.tables,
        if_exists: cli.if_exists,
        echo: cli.echo,
    })
    .with_context(|| format!("importing from {}", cli.data_dir.display()))?;

    if cli.verbose {
        for ds in &summary.datasets {
            let written = match ds.written {
                Some(n) => format!("{} rows written", n),
                None => "not written".to_string(),
            };
            println!(
                "{}: {} rows x {} columns, {}",
                ds.dataset,
                ds.rows,
                ds.columns.len(),
                written
            );
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}
