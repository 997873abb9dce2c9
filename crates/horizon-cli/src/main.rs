mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::planning::{
    ChartsArgs, InsuranceGapArgs, PlanArgs, RetirementTargetArgs, RiskProfileArgs,
};
use commands::report::ReportArgs;

/// Personal financial horizon estimates
#[derive(Parser)]
#[command(
    name = "fhe",
    version,
    about = "Personal financial horizon estimates",
    long_about = "Estimates a client's life-insurance coverage gap, inflation-adjusted \
                  retirement target, required monthly savings and risk profile \
                  with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// JSON or YAML file overriding the planning assumptions
    #[arg(long, global = true)]
    assumptions: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every calculation and return the full plan
    Plan(PlanArgs),
    /// Life-insurance coverage gap for dependents
    InsuranceGap(InsuranceGapArgs),
    /// Inflation-adjusted retirement target and monthly savings requirement
    RetirementTarget(RetirementTargetArgs),
    /// Risk tolerance label and score breakdown
    RiskProfile(RiskProfileArgs),
    /// Chart series and dashboard metrics
    Charts(ChartsArgs),
    /// Client report as plain text
    Report(ReportArgs),
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

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let assumptions = cli.assumptions.as_deref();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Plan(args) => commands::planning::run_plan(args, assumptions),
        Commands::InsuranceGap(args) => commands::planning::run_insurance_gap(args, assumptions),
        Commands::RetirementTarget(args) => {
            commands::planning::run_retirement_target(args, assumptions)
        }
        Commands::RiskProfile(args) => commands::planning::run_risk_profile(args, assumptions),
        Commands::Charts(args) => commands::planning::run_charts(args, assumptions),
        Commands::Report(args) => match commands::report::run_report(args, assumptions) {
            Ok(text) => {
                if let Some(text) = text {
                    print!("{text}");
                }
                return;
            }
            Err(e) => Err(e),
        },
        Commands::Version => {
            println!("fhe {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
