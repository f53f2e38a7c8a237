pub mod config;
pub mod entry;
pub mod listing;
pub mod menu;
pub mod report;

pub use entry::{EntryLogic, EntryOutcome};
pub use listing::ListingLogic;
pub use menu::{Menu, MenuChoice, MenuState};
pub use report::ReportLogic;
