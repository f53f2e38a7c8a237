/// ANSI color helper utilities for terminal output.
use crate::models::Status;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Status color:
/// Achieved → green
/// Not Achieved → red
pub fn color_for_status(status: Status) -> &'static str {
    if status.is_achieved() { GREEN } else { RED }
}

/// Status label wrapped in its color.
pub fn colorize_status(status: Status) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
