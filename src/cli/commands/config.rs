use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::PathBuf;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = &cli.command {
        let path = match &cli.config {
            Some(p) => PathBuf::from(p),
            None => Config::config_file(),
        };

        if *init {
            Config::init_at(&path)?;
            messages::success(format!("Config file written: {}", path.display()));
        }

        if *print_config {
            println!("# {}", path.display());
            print!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
