use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Achieved,
    NotAchieved,
}

impl Status {
    /// Reaching the target exactly counts as achieved.
    pub fn evaluate(units: i64, target: i64) -> Self {
        if units >= target {
            Status::Achieved
        } else {
            Status::NotAchieved
        }
    }

    /// Same rule on widened values, for totals summed over many shifts.
    pub fn evaluate_total(units: i128, target: i128) -> Self {
        if units >= target {
            Status::Achieved
        } else {
            Status::NotAchieved
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Achieved => "Achieved",
            Status::NotAchieved => "Not Achieved",
        }
    }

    pub fn is_achieved(&self) -> bool {
        matches!(self, Status::Achieved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
