// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::io::{self, Write};
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success<W: Write>(
    out: &mut W,
    label: &str,
    path: &Path,
) -> io::Result<()> {
    success(out, format!("{label} export completed: {}", path.display()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
