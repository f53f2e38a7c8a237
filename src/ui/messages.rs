use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg)
}

/// Errors go to the same stream as the prompts so the interactive session
/// reads in order.
pub fn error<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg)
}

/// Section header
pub fn header<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "\n{}{}--- {} ---{}", FG_BLUE, BOLD, msg, RESET)
}
