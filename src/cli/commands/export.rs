use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::pipeline;
use crate::errors::AppResult;
use crate::export;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        local_only,
        force,
    } = &cli.command
    {
        let records = pipeline::collect(cfg, *local_only)?;
        export::write(format, Path::new(file), &records, *force)?;
    }
    Ok(())
}
