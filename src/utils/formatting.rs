//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Repeat the configured separator to `width` columns.
/// An empty separator falls back to `-`.
pub fn separator_line(sep: &str, width: usize) -> String {
    let unit = if sep.is_empty() { "-" } else { sep };
    unit.repeat(width).chars().take(width).collect()
}

/// Terminal width of `s`, ignoring ANSI color sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequence: ESC [ ... final byte in '@'..='~'
            for c2 in chars.by_ref() {
                if ('@'..='~').contains(&c2) && c2 != '[' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
