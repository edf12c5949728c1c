//! Projection engine for lump sums with recurring contributions

mod engine;
mod result;

pub use engine::{
    FutureValueProjector, compound_growth, annuity_due_future_value, MAX_MILESTONES,
    ZERO_RATE_TOLERANCE,
};
pub use result::{ProjectionResult, GrowthMilestone};
