#![forbid(unsafe_code)]

//! Interactive viewer for delimited trip data.
//!
//! Loads a dataset once, then reruns the whole view composition on every
//! input event: slider-driven head slice, memoized station subset, and a
//! toggle message. See [`app`] for the composition and [`shell`] for the
//! input loop.

pub mod app;
pub mod cli;
pub mod error;
pub mod shell;

use clap::Parser;

use crate::cli::Cli;
use crate::error::Result;
use sift_core::dataset::{self, CsvOptions};

/// Parse the command line and run the viewer.
pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

/// Run the viewer with parsed options.
pub fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log, cli.log_json);

    let table = dataset::load_path(
        &cli.data,
        &CsvOptions {
            delimiter: cli.delimiter,
        },
    )?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        path = %cli.data.display(),
        "dataset loaded"
    );

    let viewer = app::build(table, &cli.filter_column, cli.width)?;
    shell::run(viewer, &cli)
}

fn init_tracing(filter: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // A second init (tests) is harmless.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
