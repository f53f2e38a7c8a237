use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use tracing::info;

/// Handle the `init` command
///
/// This creates:
///  - the config directory and file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.clone(), cli.test)?;

    println!("⚙️  Initializing prodtracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗃️  Data file   : {}", cfg.data_path().display());

    info!(data_file = %cfg.data_file, test = cli.test, "initialized");
    println!("🎉 prodtracker initialization completed!");
    Ok(())
}
