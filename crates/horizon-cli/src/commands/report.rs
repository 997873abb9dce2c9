use clap::Args;
use log::info;
use std::fs;

use horizon_core::report::{ReportDocument, ReportFigures};

use super::profile::{build_engine, ProfileArgs};

/// Arguments for the client report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

/// Build the report text; write it to `--out` when given, otherwise return it.
pub fn run_report(
    args: ReportArgs,
    assumptions: Option<&str>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let plan = engine.plan()?.result;
    let text = ReportDocument::build(engine.profile(), &ReportFigures::from(&plan)).to_text();

    match args.out {
        Some(path) => {
            fs::write(&path, &text).map_err(|e| format!("Failed to write '{path}': {e}"))?;
            info!("report written to {path} ({} bytes)", text.len());
            Ok(None)
        }
        None => Ok(Some(text)),
    }
}
