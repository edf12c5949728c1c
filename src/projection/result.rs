//! Projection output structures

use serde::{Deserialize, Serialize};

/// Outcome of projecting one set of validated parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Initial investment, passed through unchanged
    pub principal: f64,

    /// Total value at the end of the horizon
    pub future_value: f64,

    /// `future_value - principal`
    ///
    /// Contributed capital is not split out, so deposits show up here along
    /// with the growth they earned.
    pub interest_component: f64,

    /// Lump-sum leg: principal after compounding
    pub compounded_principal: f64,

    /// Contribution leg: future value of the deposit stream
    pub contribution_value: f64,
}

impl ProjectionResult {
    pub(crate) fn new(principal: f64, compounded_principal: f64, contribution_value: f64) -> Self {
        let future_value = compounded_principal + contribution_value;
        Self {
            principal,
            future_value,
            interest_component: future_value - principal,
            compounded_principal,
            contribution_value,
        }
    }
}

/// Projection truncated at a point in time, one point of a growth chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthMilestone {
    /// Months elapsed since the initial investment
    pub month: f64,

    pub result: ProjectionResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_components_add_up() {
        let result = ProjectionResult::new(1000.0, 1030.0, 204.5);

        assert_abs_diff_eq!(result.future_value, 1234.5, epsilon = 1e-10);
        assert_abs_diff_eq!(result.interest_component, 234.5, epsilon = 1e-10);
        assert_eq!(result.principal, 1000.0);
    }
}
