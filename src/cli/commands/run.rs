use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::pipeline;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { no_chart } = &cli.command {
        pipeline::run_once(cfg, !no_chart)?;
    }
    Ok(())
}
