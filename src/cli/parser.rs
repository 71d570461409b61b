use crate::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for rbuildtimes
#[derive(Parser, Debug)]
#[command(
    name = "rbuildtimes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize per-module build times from a Maven build log",
    long_about = None
)]
pub struct Cli {
    /// Path to the build output file
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on the first malformed duration instead of skipping the line
    #[arg(long = "strict")]
    pub strict: bool,

    /// Also write the sorted records to FILE
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export format: csv, json
    #[arg(long, value_name = "FORMAT", default_value = "csv")]
    pub format: ExportFormat,

    /// Overwrite the export file if it already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}
