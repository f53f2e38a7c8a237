use super::status::Status;
use serde::Serialize;

/// A single matching shift inside a daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftLine {
    pub shift: String,
    pub units_produced: i64,
    pub target: i64,
    pub status: Status,
}

/// Aggregated production for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub date: String,
    pub lines: Vec<ShiftLine>,
    /// Sums are widened so they never wrap or clamp.
    pub total_units: i128,
    pub total_target: i128,
    pub overall: Status,
}
