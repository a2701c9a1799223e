//! clubtrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod scrape;
pub mod sched;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Run { .. } => cli::commands::run::handle(cli, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; CLI overrides win over file values.
    let mut cfg = Config::load(cli.config.as_deref())?;

    if let Some(sheet) = &cli.sheet {
        cfg.sheet_csv = sheet.clone();
    }
    if let Some(url) = &cli.url {
        cfg.events_url = url.clone();
    }

    dispatch(&cli, &cfg)
}
