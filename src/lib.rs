//! rbuildtimes library root.
//! Exposes the CLI parser, the high-level run() function, and the parsing core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use cli::parser::Cli;
use config::Config;
use errors::{AppError, AppResult};

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI; clap errors become usage errors (exit 1)
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(AppError::Usage(e.render().to_string())),
    };

    // 2️⃣ load config once
    let cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ single command
    cli::commands::report::handle(&cli, &cfg)
}
