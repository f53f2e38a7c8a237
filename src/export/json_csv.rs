// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::ProductionRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<W: Write>(
    records: &[ProductionRecord],
    path: &Path,
    out: &mut W,
) -> AppResult<()> {
    info(out, format!("Exporting to JSON: {}", path.display()))?;

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success(out, "JSON", path)?;
    Ok(())
}

/// Export CSV, header row derived from the record fields.
pub(crate) fn export_csv<W: Write>(
    records: &[ProductionRecord],
    path: &Path,
    out: &mut W,
) -> AppResult<()> {
    info(out, format!("Exporting to CSV: {}", path.display()))?;

    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    notify_export_success(out, "CSV", path)?;
    Ok(())
}
