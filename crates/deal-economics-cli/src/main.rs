mod commands;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::community::CommunityArgs;
use commands::deal_sheet::DealSheetArgs;
use commands::fee_schedule::FeeScheduleArgs;
use commands::grid::GridArgs;
use commands::sensitivity::SensitivityArgs;

/// Real-estate deal underwriting
#[derive(Parser)]
#[command(
    name = "deal",
    version,
    about = "Real-estate deal underwriting with decimal precision",
    long_about = "A CLI for underwriting single-lot build-to-sell deals and multi-lot \
                  community proformas. Supports deal sheets, scenario sensitivity, \
                  breakeven pricing, price x cost grids, and LP waterfalls."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Underwrite a single lot: costs, financing, profit and verdicts
    DealSheet(DealSheetArgs),
    /// Re-run a deal under standard scenarios and solve breakeven prices
    Sensitivity(SensitivityArgs),
    /// Multi-lot community proforma with LP waterfall
    Community(CommunityArgs),
    /// Sweep sale price against a construction cost factor
    Grid(GridArgs),
    /// Show the per-house fee schedule and fee rule thresholds
    FeeSchedule(FeeScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Logs go to stderr so stdout carries only the formatted result.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::DealSheet(args) => commands::deal_sheet::run_deal_sheet(args),
        Commands::Sensitivity(args) => commands::sensitivity::run_sensitivity(args),
        Commands::Community(args) => commands::community::run_community(args),
        Commands::Grid(args) => commands::grid::run_grid(args),
        Commands::FeeSchedule(args) => commands::fee_schedule::run_fee_schedule(args),
        Commands::Version => {
            println!("deal {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
