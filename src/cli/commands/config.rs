use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::io;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let mut out = io::stdout().lock();

        if *print_config {
            ConfigLogic::print(cfg, &mut out)?;
        }

        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor.as_deref(), &mut out)?;
        }
    }

    Ok(())
}
