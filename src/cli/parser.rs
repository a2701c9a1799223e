use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clubtrack.
/// CLI application to aggregate and chart club workshop attendance.
#[derive(Parser)]
#[command(
    name = "clubtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate workshop attendance from a sign-in sheet and the club events page, then chart it",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the sign-in sheet CSV path from the configuration
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Override the events page URL from the configuration
    #[arg(global = true, long = "url")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline once: load, scrape, merge, chart
    Run {
        /// Skip opening the chart (print the summary table only)
        #[arg(long = "no-chart", help = "Do not open the attendance chart")]
        no_chart: bool,
    },

    /// Run once now, then once per day at the scheduled time
    Watch {
        /// Daily run time (HH:MM), overrides the configured schedule
        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Export the merged attendance series to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export only the sign-in sheet series (no web fetch)
        #[arg(long = "local-only")]
        local_only: bool,

        /// Overwrite the output file if it already exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
