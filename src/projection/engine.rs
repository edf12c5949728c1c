//! Future value projection: lump-sum compounding plus an annuity-due
//! contribution stream

use crate::validation::ValidatedParameters;
use super::result::{GrowthMilestone, ProjectionResult};

/// Period rates smaller than this in magnitude are treated as zero.
///
/// The annuity closed form divides by the period rate and loses all precision
/// as it approaches zero; below this the level-sum branch is exact enough.
pub const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Upper bound on the number of points returned by [`FutureValueProjector::milestones`]
pub const MAX_MILESTONES: usize = 10_000;

/// Stateless projection engine
///
/// Total over [`ValidatedParameters`]: every validated input produces a result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureValueProjector;

impl FutureValueProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project the future value at the end of the validated horizon
    pub fn project(&self, params: &ValidatedParameters) -> ProjectionResult {
        let principal = params.initial_investment();
        let annual_rate = params.annual_interest_rate_percent() / 100.0;
        let years = params.duration_months() / 12.0;

        let compounded_principal = compound_growth(
            principal,
            annual_rate,
            params.compounding_frequency().periods_per_year(),
            years,
        );

        // Contributions run at their own period rate, independent of the
        // compounding frequency chosen for the lump sum
        let contribution_value = match params.contribution_frequency().periods_per_year() {
            Some(periods) if params.contribution_amount() > 0.0 => annuity_due_future_value(
                params.contribution_amount(),
                annual_rate,
                periods,
                years,
            ),
            _ => 0.0,
        };

        let result = ProjectionResult::new(principal, compounded_principal, contribution_value);

        log::debug!(
            "Projected {:.2} @ {}% ({}) + {:.2} ({}) over {} months: fv={:.6}",
            principal,
            params.annual_interest_rate_percent(),
            params.compounding_frequency(),
            params.contribution_amount(),
            params.contribution_frequency(),
            params.duration_months(),
            result.future_value,
        );

        result
    }

    /// Projection snapshots from month 0 to the full horizon
    ///
    /// Points fall on every multiple of `step_months` strictly inside the
    /// horizon, then the horizon itself. A step of 0 means yearly (12). The
    /// step is widened when needed so at most [`MAX_MILESTONES`] points
    /// are returned.
    pub fn milestones(&self, params: &ValidatedParameters, step_months: u32) -> Vec<GrowthMilestone> {
        let duration = params.duration_months();
        let requested = if step_months == 0 { 12.0 } else { step_months as f64 };
        let step = requested.max((duration / (MAX_MILESTONES - 1) as f64).ceil());

        let mut points = vec![self.milestone(params, 0.0)];
        if duration <= 0.0 {
            return points;
        }

        let mut k = 1.0;
        while k * step < duration && points.len() < MAX_MILESTONES - 1 {
            points.push(self.milestone(params, k * step));
            k += 1.0;
        }
        points.push(self.milestone(params, duration));

        points
    }

    fn milestone(&self, params: &ValidatedParameters, month: f64) -> GrowthMilestone {
        GrowthMilestone {
            month,
            result: self.project(&params.with_duration(month)),
        }
    }
}

/// Lump sum compounded `periods_per_year` times a year for `years`
///
/// `principal * (1 + r/n)^(n*t)`; a zero rate returns the principal exactly.
/// A zero principal stays zero even when the growth factor overflows.
pub fn compound_growth(principal: f64, annual_rate: f64, periods_per_year: u32, years: f64) -> f64 {
    if principal == 0.0 {
        return 0.0;
    }
    let n = periods_per_year as f64;
    principal * (1.0 + annual_rate / n).powf(n * years)
}

/// Future value of level deposits made at the start of each period
///
/// Each deposit grows at the period rate `r/m` for the rest of the horizon,
/// including the period it was made in. With a zero rate this is the plain
/// sum of `m * t` deposits.
pub fn annuity_due_future_value(payment: f64, annual_rate: f64, periods_per_year: u32, years: f64) -> f64 {
    let m = periods_per_year as f64;
    let period_rate = annual_rate / m;

    if period_rate.abs() < ZERO_RATE_TOLERANCE {
        return payment * m * years;
    }

    let growth = (1.0 + period_rate).powf(m * years);
    payment * (growth - 1.0) / period_rate * (1.0 + period_rate)
}
