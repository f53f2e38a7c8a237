//! Flat-file persistence for production records.
//!
//! One record per line, `date,shift,units_produced,target`, no header and no
//! quoting. Every save rewrites the whole file; nothing is appended in place
//! and there is no temp-file-and-rename step, so a crash mid-write can leave
//! a truncated file behind.

use crate::errors::AppResult;
use crate::models::ProductionRecord;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DATA_FILE: &str = "production_data.txt";

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed record in file order.
    ///
    /// A missing file is an empty dataset. Malformed lines are dropped
    /// without notice to the user.
    pub fn load(&self) -> AppResult<Vec<ProductionRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records = read_records(file)?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded production records"
        );
        Ok(records)
    }

    /// Replace the file content with `records`.
    pub fn save(&self, records: &[ProductionRecord]) -> AppResult<()> {
        let file = File::create(&self.path)?;
        write_records(file, records)?;
        info!(
            path = %self.path.display(),
            count = records.len(),
            "saved production records"
        );
        Ok(())
    }
}

/// Parse records from any reader, skipping lines that do not have exactly
/// four fields or whose numeric fields are not integers.
pub fn read_records<R: Read>(reader: R) -> AppResult<Vec<ProductionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(error = %e, "skipping unreadable line");
                skipped += 1;
                continue;
            }
        };

        match parse_row(&row) {
            Some(record) => records.push(record),
            None => {
                debug!(line = ?row.position().map(|p| p.line()), "skipping malformed line");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "malformed lines ignored");
    }

    Ok(records)
}

/// Write records one per line, comma separated, `\n` terminated.
pub fn write_records<W: Write>(writer: W, records: &[ProductionRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        wtr.write_record(record.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}

fn parse_row(row: &StringRecord) -> Option<ProductionRecord> {
    if row.len() != FIELD_COUNT {
        return None;
    }

    // Whitespace around the whole line is not part of the data: the date may
    // carry leading blanks and both numbers may be padded.
    let date = row.get(0)?.trim_start();
    let shift = row.get(1)?;
    let units = row.get(2)?.trim().parse::<i64>().ok()?;
    let target = row.get(3)?.trim().parse::<i64>().ok()?;

    Some(ProductionRecord::new(date, shift, units, target))
}
