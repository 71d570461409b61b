// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::BuildRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[BuildRecord], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

const CSV_HEADERS: [&str; 4] = ["module", "status", "time", "seconds"];

/// Export CSV. The header is written explicitly so an empty export still
/// carries it.
pub(crate) fn export_csv(records: &[BuildRecord], path: &Path) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
