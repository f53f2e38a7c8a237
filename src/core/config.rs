use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print<W: Write>(cfg: &Config, out: &mut W) -> AppResult<()> {
        writeln!(out, "📄 Current configuration:\n")?;
        write!(out, "{}", cfg.to_yaml()?)?;
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to `$EDITOR`,
    /// `$VISUAL`, then the platform default.
    pub fn edit<W: Write>(path: &Path, editor: Option<&str>, out: &mut W) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::launch(&editor_to_use, path) {
            success(
                out,
                format!("Configuration file edited successfully using '{}'", editor_to_use),
            )?;
            return Ok(());
        }

        warning(
            out,
            format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ),
        )?;

        if editor_to_use != default_editor && Self::launch(&default_editor, path) {
            success(
                out,
                format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ),
            )?;
            return Ok(());
        }

        Err(AppError::Config(format!(
            "failed to edit {} using '{}'",
            path.display(),
            default_editor
        )))
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn launch(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }
}
