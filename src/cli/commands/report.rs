use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use std::io;

/// Print the daily report for the date given on the command line.
/// A date without records is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date } = cmd {
        let records = RecordStore::new(cfg.data_path()).load()?;
        let mut out = io::stdout().lock();
        ReportLogic::print(&records, date, &mut out, &cfg.separator_char)?;
    }
    Ok(())
}
