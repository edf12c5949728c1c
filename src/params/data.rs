//! Investment parameter records matching the calculator form fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, Violation};

/// How often interest is credited to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Yearly,
    Monthly,
    Weekly,
}

impl CompoundingFrequency {
    pub const LABELS: &'static str = "yearly, monthly, weekly";

    /// Number of compounding periods in one year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
        }
    }

    /// Lowercase label used by the form and CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Yearly => "yearly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" => Ok(CompoundingFrequency::Yearly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "weekly" => Ok(CompoundingFrequency::Weekly),
            _ => Err(Violation::UnknownFrequency {
                field: "compounding frequency",
                value: s.to_string(),
                expected: Self::LABELS,
            }
            .into()),
        }
    }
}

/// How often a recurring contribution is deposited
///
/// `None` disables contributions regardless of the contribution amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    None,
    Yearly,
    Monthly,
    Weekly,
}

impl ContributionFrequency {
    pub const LABELS: &'static str = "none, yearly, monthly, weekly";

    /// Number of deposits in one year, `None` when contributions are disabled
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            ContributionFrequency::None => None,
            ContributionFrequency::Yearly => Some(1),
            ContributionFrequency::Monthly => Some(12),
            ContributionFrequency::Weekly => Some(52),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::None => "none",
            ContributionFrequency::Yearly => "yearly",
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ContributionFrequency::None),
            "yearly" => Ok(ContributionFrequency::Yearly),
            "monthly" => Ok(ContributionFrequency::Monthly),
            "weekly" => Ok(ContributionFrequency::Weekly),
            _ => Err(Violation::UnknownFrequency {
                field: "contribution frequency",
                value: s.to_string(),
                expected: Self::LABELS,
            }
            .into()),
        }
    }
}

/// Raw parameters as entered by the user
///
/// Nothing here is checked yet: amounts may be negative and any number may be
/// NaN (an empty form field). Pass through [`crate::validate`] before projecting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Lump sum invested at month 0
    pub initial_investment: f64,

    /// Nominal annual rate as a percentage (3.0 = 3%)
    pub annual_interest_rate_percent: f64,

    pub compounding_frequency: CompoundingFrequency,

    /// Amount deposited each contribution period
    pub contribution_amount: f64,

    pub contribution_frequency: ContributionFrequency,

    /// Projection horizon in months (may be fractional)
    pub duration_months: f64,
}

impl Default for InvestmentParameters {
    /// Initial values of the calculator form
    fn default() -> Self {
        Self {
            initial_investment: 1000.0,
            annual_interest_rate_percent: 3.0,
            compounding_frequency: CompoundingFrequency::Yearly,
            contribution_amount: 100.0,
            contribution_frequency: ContributionFrequency::Yearly,
            duration_months: 12.0,
        }
    }
}

/// A named set of raw parameters, one row of a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub params: InvestmentParameters,
}

impl Scenario {
    pub fn new(id: impl Into<String>, params: InvestmentParameters) -> Self {
        Self { id: id.into(), params }
    }
}
