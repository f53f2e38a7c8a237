pub mod record;
pub mod report;
pub mod status;

pub use record::ProductionRecord;
pub use report::{DailyReport, ShiftLine};
pub use status::Status;
