use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::ui::Console;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out, force } = cmd {
        let records = RecordStore::new(cfg.data_path()).load()?;
        let mut console = Console::stdio();
        ExportLogic::export(&records, *format, Path::new(out), *force, &mut console)?;
    }
    Ok(())
}
