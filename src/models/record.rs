use super::status::Status;
use serde::Serialize;
use std::fmt;

/// One logged shift: what was produced against what was expected.
///
/// `date` and `shift` are kept as free text. Dates are expected as
/// `YYYY-MM-DD` and shifts as Morning / Evening / Night, but neither is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionRecord {
    pub date: String,
    pub shift: String,
    pub units_produced: i64,
    pub target: i64,
}

impl ProductionRecord {
    pub fn new(
        date: impl Into<String>,
        shift: impl Into<String>,
        units_produced: i64,
        target: i64,
    ) -> Self {
        Self {
            date: date.into(),
            shift: shift.into(),
            units_produced,
            target,
        }
    }

    pub fn status(&self) -> Status {
        Status::evaluate(self.units_produced, self.target)
    }

    /// Fields in on-disk order: date, shift, units_produced, target.
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.shift.clone(),
            self.units_produced.to_string(),
            self.target.to_string(),
        ]
    }
}

impl fmt::Display for ProductionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.date, self.shift, self.units_produced, self.target
        )
    }
}
