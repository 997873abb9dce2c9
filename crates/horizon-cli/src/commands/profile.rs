use clap::Args;
use log::{debug, info};
use rust_decimal::Decimal;

use horizon_core::{FinancialEngine, PlanningAssumptions, ProfileInput};

use crate::input;

/// Client profile, from a JSON file, piped stdin, or individual flags.
///
/// Flags left unset fall back to the reference client (35, retiring at 65,
/// 85,000 income, 40,000 saved, 25,000 debt, 2 dependents, 2.5% / 7%).
#[derive(Args, Debug, Default)]
#[command(allow_hyphen_values = true)]
pub struct ProfileArgs {
    /// Current age (18-70)
    #[arg(long)]
    pub age: Option<u32>,

    /// Target retirement age (above current age, at most 80)
    #[arg(long)]
    pub retire_age: Option<u32>,

    /// Annual income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Current savings
    #[arg(long)]
    pub savings: Option<Decimal>,

    /// Total outstanding debt
    #[arg(long)]
    pub debt: Option<Decimal>,

    /// Number of dependents (0-5)
    #[arg(long)]
    pub dependents: Option<u32>,

    /// Inflation rate in percent (e.g. 2.5 for 2.5%)
    #[arg(long)]
    pub inflation: Option<Decimal>,

    /// Expected investment return in percent (e.g. 7 for 7%)
    #[arg(long)]
    pub investment_return: Option<Decimal>,

    /// Path to JSON profile file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl ProfileArgs {
    fn flags_to_input(&self) -> ProfileInput {
        let defaults = ProfileInput::default();
        ProfileInput {
            age: self.age.unwrap_or(defaults.age),
            retire_age: self.retire_age.unwrap_or(defaults.retire_age),
            income: self.income.unwrap_or(defaults.income),
            savings: self.savings.unwrap_or(defaults.savings),
            debt: self.debt.unwrap_or(defaults.debt),
            dependents: self.dependents.unwrap_or(defaults.dependents),
            inflation_rate_pct: self.inflation.unwrap_or(defaults.inflation_rate_pct),
            investment_return_pct: self
                .investment_return
                .unwrap_or(defaults.investment_return_pct),
        }
    }

    pub fn resolve(&self) -> Result<ProfileInput, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            info!("reading profile from {path}");
            return input::file::read_json(path);
        }
        if let Some(profile) = input::stdin::read_stdin::<ProfileInput>()? {
            info!("reading profile from stdin");
            return Ok(profile);
        }
        debug!("building profile from flags");
        Ok(self.flags_to_input())
    }
}

pub fn load_assumptions(
    path: Option<&str>,
) -> Result<PlanningAssumptions, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("loading planning assumptions from {path}");
            input::file::read_config(path)
        }
        None => Ok(PlanningAssumptions::default()),
    }
}

pub fn build_engine(
    args: &ProfileArgs,
    assumptions_path: Option<&str>,
) -> Result<FinancialEngine, Box<dyn std::error::Error>> {
    let profile = args.resolve()?;
    let assumptions = load_assumptions(assumptions_path)?;
    Ok(FinancialEngine::from_input(&profile, assumptions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unset_flags_use_reference_client() {
        assert_eq!(ProfileArgs::default().flags_to_input(), ProfileInput::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = ProfileArgs {
            age: Some(45),
            income: Some(dec!(120000)),
            inflation: Some(dec!(3.1)),
            ..Default::default()
        };
        let input = args.flags_to_input();
        assert_eq!(input.age, 45);
        assert_eq!(input.income, dec!(120000));
        assert_eq!(input.inflation_rate_pct, dec!(3.1));
        assert_eq!(input.retire_age, 65);
    }

    #[test]
    fn test_no_assumptions_file_gives_defaults() {
        assert_eq!(load_assumptions(None).unwrap(), PlanningAssumptions::default());
    }
}
