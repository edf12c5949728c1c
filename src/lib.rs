//! Compounding Calculator - Future value projection engine
//!
//! This library provides:
//! - Validation of raw investment parameters
//! - Lump-sum compound growth plus annuity-due contribution streams
//! - Growth milestones for charting a projection over time
//! - CSV scenario loading and parallel batch / rate-sweep runs

pub mod params;
pub mod validation;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use params::{InvestmentParameters, CompoundingFrequency, ContributionFrequency, Scenario};
pub use validation::{validate, ValidatedParameters, ValidationError, Violation};
pub use projection::{FutureValueProjector, ProjectionResult, GrowthMilestone};
pub use scenario::{ScenarioOutcome, ScenarioRunner, OutcomeRecord};

/// Validate raw parameters and project their future value.
///
/// The projector only ever sees input that passed validation.
pub fn compute(raw: InvestmentParameters) -> Result<ProjectionResult, ValidationError> {
    let validated = validate(raw)?;
    Ok(FutureValueProjector::new().project(&validated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(
        initial: f64,
        rate: f64,
        compounding: CompoundingFrequency,
        contribution: f64,
        contribution_frequency: ContributionFrequency,
        months: f64,
    ) -> InvestmentParameters {
        InvestmentParameters {
            initial_investment: initial,
            annual_interest_rate_percent: rate,
            compounding_frequency: compounding,
            contribution_amount: contribution,
            contribution_frequency,
            duration_months: months,
        }
    }

    #[test]
    fn test_one_year_yearly_compounding() {
        let result = compute(params(
            1000.0, 3.0, CompoundingFrequency::Yearly, 0.0, ContributionFrequency::None, 12.0,
        ))
        .unwrap();

        assert_abs_diff_eq!(result.future_value, 1030.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.interest_component, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.principal, 1000.0);
    }

    #[test]
    fn test_zero_rate_monthly_contributions() {
        let result = compute(params(
            1000.0, 0.0, CompoundingFrequency::Yearly, 100.0, ContributionFrequency::Monthly, 12.0,
        ))
        .unwrap();

        assert_abs_diff_eq!(result.future_value, 2200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_investment_zero_duration() {
        let result = compute(params(
            0.0, 5.0, CompoundingFrequency::Monthly, 0.0, ContributionFrequency::None, 0.0,
        ))
        .unwrap();

        assert_abs_diff_eq!(result.future_value, 0.0);
        assert_abs_diff_eq!(result.interest_component, 0.0);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let raw = InvestmentParameters {
            initial_investment: 500.0,
            annual_interest_rate_percent: -1.0,
            ..Default::default()
        };

        let err = compute(raw).unwrap_err();
        assert_eq!(err.violations(), &[Violation::NegativeInterestRate]);
    }

    #[test]
    fn test_nan_is_rejected() {
        let raw = InvestmentParameters {
            initial_investment: f64::NAN,
            ..Default::default()
        };
        assert!(compute(raw).is_err());
    }
}
