//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right, separator_line, visible_width};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
    separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Row printed below a second separator line (totals).
    pub fn set_footer(&mut self, row: Vec<String>) {
        self.footer = Some(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .chain(self.footer.iter())
                    .filter_map(|row| row.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[String], widths: &[usize]) -> String {
        let parts: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, w))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                match col.align {
                    Align::Left => pad_right(cell, *w),
                    Align::Right => pad_left(cell, *w),
                }
            })
            .collect();
        parts.join("  ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let rule = separator_line(&self.separator, total);

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = String::new();
        out.push_str(&self.render_line(&headers, &widths));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_line(row, &widths));
            out.push('\n');
        }

        if let Some(footer) = &self.footer {
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&self.render_line(footer, &widths));
            out.push('\n');
        }

        out
    }
}
