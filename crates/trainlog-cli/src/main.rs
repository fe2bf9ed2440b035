//! trainlog CLI — the user-facing command-line interface.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

use commands::GlobalArgs;

#[derive(Parser)]
#[command(
    name = "trainlog",
    version,
    about = "Training completion tracker and reporter"
)]
struct Cli {
    /// Path to the JSON roster (falls back to the configured default)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text, json, markdown
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the people who completed each training
    Count,

    /// List people who completed trainings within a fiscal year
    FiscalYear {
        /// Fiscal year, e.g. 2024 for 07/01/2023 - 06/30/2024
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        year: i32,

        /// Trainings to check (comma-separated, default: configured list)
        #[arg(long)]
        trainings: Option<String>,
    },

    /// List people with expired or soon-to-expire trainings
    Expiring {
        /// Reference date (MM/DD/YYYY)
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Check a roster for problems
    Validate,

    /// Create a starter config and sample roster
    Init,

    /// Menu-driven session over the loaded roster
    Interactive,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    trainlog_core::date::parse_reference_date(s).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trainlog=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    let global = GlobalArgs {
        roster: cli.roster,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        Commands::Count => commands::count::execute(&global),
        Commands::FiscalYear { year, trainings } => {
            commands::fiscal_year::execute(&global, year, trainings)
        }
        Commands::Expiring { date } => commands::expiring::execute(&global, date),
        Commands::Validate => commands::validate::execute(&global),
        Commands::Init => commands::init::execute(),
        Commands::Interactive => commands::interactive::execute(&global),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
