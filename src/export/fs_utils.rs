// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::Console;
use crate::ui::messages::{info, warning};
use std::io::{BufRead, Write};
use std::path::Path;

/// Check whether an output file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user
pub(crate) fn ensure_writable<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(
        console.out(),
        format!("The file '{}' already exists.", path.display()),
    )?;

    let ans = console.ask("Overwrite? [y/N]: ")?.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info(console.out(), "Existing file will be overwritten.")?;
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
