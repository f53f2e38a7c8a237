use crate::config::Config;
use crate::core::listing::ListingLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let records = RecordStore::new(cfg.data_path()).load()?;
    let mut out = io::stdout().lock();
    ListingLogic::print(&records, &mut out, &cfg.separator_char)
}
