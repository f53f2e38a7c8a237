//! prodtracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (store, core logic, console UI).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{Verbosity, init_logging};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => cli::commands::menu::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(Commands::List) => cli::commands::list::handle(cfg),
        Some(cmd @ Commands::Report { .. }) => cli::commands::report::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_logging(Verbosity::from_occurrences(cli.verbose));

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line override of the data file
    if let Some(custom) = &cli.file {
        cfg.data_file = custom.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
