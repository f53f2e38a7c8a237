use crate::config::Config;
use crate::core::menu::Menu;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::Console;

/// Handle the interactive menu (also the default with no command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());
    let mut menu = Menu::open(&store, &cfg.separator_char)?;
    let mut console = Console::stdio();
    menu.run(&mut console)
}
