//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Command line
    // ---------------------------
    /// Already rendered by clap (usage text included).
    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Input file
    // ---------------------------
    #[error("File '{0}' not found.")]
    FileNotFound(String),

    #[error("Error reading file '{path}': {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: '{0}'")]
    InvalidDuration(String),

    #[error("Invalid duration '{token}' on line {line}")]
    InvalidDurationOnLine { line: usize, token: String },

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
