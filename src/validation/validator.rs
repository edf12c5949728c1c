//! Input checks that turn raw parameters into [`ValidatedParameters`]

use serde::Serialize;

use super::errors::{ValidationError, Violation};
use crate::params::{CompoundingFrequency, ContributionFrequency, InvestmentParameters};

/// Parameters that passed every check
///
/// Only [`validate`] builds this type, so holding one guarantees all amounts
/// are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedParameters {
    initial_investment: f64,
    annual_interest_rate_percent: f64,
    compounding_frequency: CompoundingFrequency,
    contribution_amount: f64,
    contribution_frequency: ContributionFrequency,
    duration_months: f64,
}

impl ValidatedParameters {
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    pub fn annual_interest_rate_percent(&self) -> f64 {
        self.annual_interest_rate_percent
    }

    pub fn compounding_frequency(&self) -> CompoundingFrequency {
        self.compounding_frequency
    }

    pub fn contribution_amount(&self) -> f64 {
        self.contribution_amount
    }

    pub fn contribution_frequency(&self) -> ContributionFrequency {
        self.contribution_frequency
    }

    pub fn duration_months(&self) -> f64 {
        self.duration_months
    }

    /// Same parameters over a shorter (or longer) horizon
    ///
    /// `months` must be finite and non-negative; milestone generation only
    /// passes values between 0 and the validated duration.
    pub(crate) fn with_duration(&self, months: f64) -> Self {
        debug_assert!(months.is_finite() && months >= 0.0);
        Self {
            duration_months: months,
            ..*self
        }
    }
}

impl TryFrom<InvestmentParameters> for ValidatedParameters {
    type Error = ValidationError;

    fn try_from(raw: InvestmentParameters) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

impl From<ValidatedParameters> for InvestmentParameters {
    fn from(p: ValidatedParameters) -> Self {
        Self {
            initial_investment: p.initial_investment,
            annual_interest_rate_percent: p.annual_interest_rate_percent,
            compounding_frequency: p.compounding_frequency,
            contribution_amount: p.contribution_amount,
            contribution_frequency: p.contribution_frequency,
            duration_months: p.duration_months,
        }
    }
}

/// Check raw parameters, collecting every violation
///
/// Order: finiteness of all numbers, then the sign checks on rate, duration,
/// investment and contribution. A number that is not finite is reported once
/// and skipped by its sign check. Frequencies are closed enums and need no
/// check here; unknown labels are rejected when they are parsed.
pub fn validate(raw: InvestmentParameters) -> Result<ValidatedParameters, ValidationError> {
    let mut violations = Vec::new();

    let numbers = [
        ("Initial investment", raw.initial_investment),
        ("Interest rate", raw.annual_interest_rate_percent),
        ("Contribution amount", raw.contribution_amount),
        ("Number of months", raw.duration_months),
    ];
    for (field, value) in numbers {
        if !value.is_finite() {
            violations.push(Violation::NotFinite { field });
        }
    }

    // NaN compares false, so non-finite values never trip a sign check twice
    if raw.annual_interest_rate_percent < 0.0 && raw.annual_interest_rate_percent.is_finite() {
        violations.push(Violation::NegativeInterestRate);
    }
    if raw.duration_months < 0.0 && raw.duration_months.is_finite() {
        violations.push(Violation::NegativeDuration);
    }
    if raw.initial_investment < 0.0 && raw.initial_investment.is_finite() {
        violations.push(Violation::NegativeInvestment);
    }
    if raw.contribution_amount < 0.0 && raw.contribution_amount.is_finite() {
        violations.push(Violation::NegativeContribution);
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    Ok(ValidatedParameters {
        initial_investment: raw.initial_investment,
        annual_interest_rate_percent: raw.annual_interest_rate_percent,
        compounding_frequency: raw.compounding_frequency,
        contribution_amount: raw.contribution_amount,
        contribution_frequency: raw.contribution_frequency,
        duration_months: raw.duration_months,
    })
}
