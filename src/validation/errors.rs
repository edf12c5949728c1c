//! Validation error types

use thiserror::Error;

/// One broken input constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Interest rate cannot be negative")]
    NegativeInterestRate,

    #[error("Number of months cannot be negative")]
    NegativeDuration,

    #[error("Initial investment cannot be negative")]
    NegativeInvestment,

    #[error("Contribution amount cannot be negative")]
    NegativeContribution,

    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownFrequency {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Rejected input, carrying every violation found in check order
///
/// Displays as a single message suitable for showing next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build from a non-empty list of violations
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation found, for hosts that only show one message
    pub fn first(&self) -> &Violation {
        &self.violations[0]
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(vec![violation])
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_violation_message() {
        let err = ValidationError::from(Violation::NegativeDuration);
        assert_eq!(err.to_string(), "Number of months cannot be negative");
    }

    #[test]
    fn test_messages_joined_in_order() {
        let err = ValidationError::new(vec![
            Violation::NotFinite { field: "Initial investment" },
            Violation::NegativeInterestRate,
        ]);

        assert_eq!(
            err.to_string(),
            "Initial investment must be a finite number; Interest rate cannot be negative"
        );
        assert_eq!(err.first(), &Violation::NotFinite { field: "Initial investment" });
    }
}
