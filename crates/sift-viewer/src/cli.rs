use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "sift-viewer",
    about = "Interactive viewer for delimited trip data",
    version
)]
pub struct Cli {
    /// Path to the delimited dataset.
    pub data: PathBuf,

    /// Column driving the station filter.
    #[arg(long, default_value = "start station name")]
    pub filter_column: String,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Render width in display columns.
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Read commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print the session state as JSON on exit.
    #[arg(long)]
    pub dump_state: bool,

    /// Log filter (tracing env-filter syntax).
    #[arg(long, default_value = "warn")]
    pub log: String,

    /// Emit logs as JSON.
    #[arg(long)]
    pub log_json: bool,
}
