use clap::Args;
use serde_json::{json, Value};

use horizon_core::presentation;

use super::profile::{build_engine, ProfileArgs};

/// Arguments for the full plan
#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Arguments for the life-insurance coverage gap
#[derive(Args)]
pub struct InsuranceGapArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Arguments for the retirement target and monthly savings requirement
#[derive(Args)]
pub struct RetirementTargetArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Arguments for risk profile scoring
#[derive(Args)]
pub struct RiskProfileArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Arguments for chart and dashboard data
#[derive(Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run_plan(
    args: PlanArgs,
    assumptions: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let result = engine.plan()?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_insurance_gap(
    args: InsuranceGapArgs,
    assumptions: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let gap = engine.calc_insurance_gap()?;
    Ok(json!({
        "result": gap,
        "methodology": "PV of income replacement annuity + debt - savings, floored at 0",
    }))
}

pub fn run_retirement_target(
    args: RetirementTargetArgs,
    assumptions: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let target = engine.calc_retirement_target()?;
    let monthly = engine.calc_monthly_savings_req(target.target_corpus, target.years_to_retire)?;
    Ok(json!({
        "result": {
            "target_corpus": target.target_corpus,
            "years_to_retire": target.years_to_retire,
            "current_annual_need": target.current_annual_need,
            "future_annual_need": target.future_annual_need,
            "monthly_savings_required": monthly,
        },
        "methodology": "Inflated replacement income / safe withdrawal rate; PMT at annual return / 12",
    }))
}

pub fn run_risk_profile(
    args: RiskProfileArgs,
    assumptions: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let assessment = engine.risk_assessment();
    Ok(json!({
        "result": {
            "label": assessment.label,
            "description": assessment.label.to_string(),
            "score": assessment.score,
            "years_to_retire": assessment.years_to_retire,
            "debt_ratio": assessment.debt_ratio,
            "horizon_points": assessment.horizon_points,
            "leverage_points": assessment.leverage_points,
        },
        "methodology": "Points score over time horizon and debt-to-income",
    }))
}

pub fn run_charts(
    args: ChartsArgs,
    assumptions: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = build_engine(&args.profile, assumptions)?;
    let plan = engine.plan()?.result;
    let dashboard = presentation::dashboard(engine.profile(), &plan);
    Ok(serde_json::to_value(dashboard)?)
}
