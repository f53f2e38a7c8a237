// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::ProductionRecord;
use crate::ui::Console;
use crate::ui::messages::warning;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write all `records` to `file` in `format`.
    ///
    /// An existing output file is only replaced with `force` or after the
    /// user confirms. Returns `false` when there was nothing to export.
    pub fn export<R: BufRead, W: Write>(
        records: &[ProductionRecord],
        format: ExportFormat,
        file: &Path,
        force: bool,
        console: &mut Console<R, W>,
    ) -> AppResult<bool> {
        if records.is_empty() {
            warning(console.out(), "No production records to export.")?;
            return Ok(false);
        }

        ensure_writable(file, force, console)?;

        match format {
            ExportFormat::Csv => export_csv(records, file, console.out())?,
            ExportFormat::Json => export_json(records, file, console.out())?,
        }

        info!(
            format = format.as_str(),
            path = %file.display(),
            count = records.len(),
            "records exported"
        );
        Ok(true)
    }
}
