// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::BuildRecord;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Writes `records` to `path` in the given format, in the order received.
    pub fn export(
        records: &[BuildRecord],
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(records, path)?,
            ExportFormat::Json => export_json(records, path)?,
        }

        Ok(())
    }
}
