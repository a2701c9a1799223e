use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::pipeline;
use crate::errors::AppResult;
use crate::sched;
use crate::ui::messages;
use log::error;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { at } = &cli.command {
        let raw = at.as_deref().unwrap_or(&cfg.schedule_time);
        let at = sched::parse_schedule_time(raw)?;

        messages::info(format!(
            "Running now, then daily at {} (checking every 60s)",
            at.format("%H:%M")
        ));

        // A failed run ends that invocation only; the loop keeps going.
        sched::run_daily(at, || {
            if let Err(e) = pipeline::run_once(cfg, true) {
                error!("scheduled run failed: {}", e);
                messages::error(format!("Run failed: {}", e));
            }
        });
    }
    Ok(())
}
