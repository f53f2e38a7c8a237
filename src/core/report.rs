use crate::errors::AppResult;
use crate::models::{DailyReport, ProductionRecord, ShiftLine, Status};
use crate::ui::Console;
use crate::ui::messages::{header, warning};
use crate::utils::colorize_status;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

pub struct ReportLogic;

impl ReportLogic {
    /// Aggregate every record whose date equals `date` exactly.
    ///
    /// Returns `None` when nothing matches. Shifts are listed in stored order
    /// and duplicates are all counted.
    pub fn build(records: &[ProductionRecord], date: &str) -> Option<DailyReport> {
        let lines: Vec<ShiftLine> = records
            .iter()
            .filter(|r| r.date == date)
            .map(|r| ShiftLine {
                shift: r.shift.clone(),
                units_produced: r.units_produced,
                target: r.target,
                status: r.status(),
            })
            .collect();

        if lines.is_empty() {
            return None;
        }

        let (total_units, total_target) = lines.iter().fold((0i128, 0i128), |(u, t), l| {
            (u + i128::from(l.units_produced), t + i128::from(l.target))
        });

        Some(DailyReport {
            date: date.to_string(),
            lines,
            total_units,
            total_target,
            overall: Status::evaluate_total(total_units, total_target),
        })
    }

    /// Ask for a date and print its report.
    pub fn prompt_and_print<R: BufRead, W: Write>(
        records: &[ProductionRecord],
        console: &mut Console<R, W>,
        separator: &str,
    ) -> AppResult<Option<DailyReport>> {
        let date = console.ask("Enter date (YYYY-MM-DD): ")?;
        Self::print(records, &date, console.out(), separator)
    }

    /// Print the report for `date`, or a not-found message.
    pub fn print<W: Write>(
        records: &[ProductionRecord],
        date: &str,
        out: &mut W,
        separator: &str,
    ) -> AppResult<Option<DailyReport>> {
        let Some(report) = Self::build(records, date) else {
            warning(out, "No production data found for this date.")?;
            return Ok(None);
        };

        header(out, format!("Daily Production Report {}", report.date))?;
        write!(out, "{}", render(&report, separator))?;
        Ok(Some(report))
    }
}

fn render(report: &DailyReport, separator: &str) -> String {
    let mut table = Table::new(
        vec![
            Column::left("Shift"),
            Column::right("Units"),
            Column::right("Target"),
            Column::left("Status"),
        ],
        separator,
    );

    for line in &report.lines {
        table.add_row(vec![
            line.shift.clone(),
            line.units_produced.to_string(),
            line.target.to_string(),
            colorize_status(line.status),
        ]);
    }

    table.set_footer(vec![
        "Total".to_string(),
        report.total_units.to_string(),
        report.total_target.to_string(),
        colorize_status(report.overall),
    ]);

    table.render()
}
