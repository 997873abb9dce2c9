pub mod assumptions;
pub mod engine;
pub mod error;
pub mod format;
pub mod insurance;
pub mod presentation;
pub mod profile;
pub mod retirement;
pub mod risk;
pub mod time_value;
pub mod types;

#[cfg(feature = "report")]
pub mod report;

pub use assumptions::{PlanningAssumptions, RiskThresholds};
pub use engine::{FinancialEngine, FinancialPlan, SavingsBurden};
pub use error::HorizonError;
pub use insurance::InsuranceGap;
pub use profile::{ClientProfile, ProfileInput};
pub use retirement::RetirementTarget;
pub use risk::{RiskAssessment, RiskLabel};
pub use types::*;

/// Standard result type for all horizon operations
pub type HorizonResult<T> = Result<T, HorizonError>;
