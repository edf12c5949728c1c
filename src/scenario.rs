//! Scenario runner for batch projections
//!
//! Every scenario is independent, so batches fan out over the rayon pool with
//! nothing shared between computations.

use rayon::prelude::*;
use serde::Serialize;

use crate::params::{InvestmentParameters, Scenario};
use crate::projection::{FutureValueProjector, ProjectionResult};
use crate::validation::{validate, ValidationError};

/// Result of one scenario: a projection, or the reason its input was rejected
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub id: String,
    pub result: Result<ProjectionResult, ValidationError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Flatten into a serializable record for CSV/JSON output
    pub fn to_record(&self) -> OutcomeRecord {
        match &self.result {
            Ok(r) => OutcomeRecord {
                id: self.id.clone(),
                status: "ok",
                principal: Some(r.principal),
                future_value: Some(r.future_value),
                interest_component: Some(r.interest_component),
                error: None,
            },
            Err(e) => OutcomeRecord {
                id: self.id.clone(),
                status: "invalid",
                principal: None,
                future_value: None,
                interest_component: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Flat output row, one per scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRecord {
    pub id: String,
    pub status: &'static str,
    pub principal: Option<f64>,
    pub future_value: Option<f64>,
    pub interest_component: Option<f64>,
    pub error: Option<String>,
}

/// Runs validation + projection over many scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("scenarios.csv")?;
///
/// for outcome in runner.run_batch(&scenarios) {
///     println!("{}: {:?}", outcome.id, outcome.result);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    projector: FutureValueProjector,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            projector: FutureValueProjector::new(),
        }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let result = validate(scenario.params).map(|p| self.projector.project(&p));

        if let Err(e) = &result {
            log::warn!("Scenario {} rejected: {}", scenario.id, e);
        }

        ScenarioOutcome {
            id: scenario.id.clone(),
            result,
        }
    }

    /// Run scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        log::info!("Running {} scenarios", scenarios.len());

        let outcomes: Vec<ScenarioOutcome> = scenarios.par_iter().map(|s| self.run(s)).collect();

        let rejected = outcomes.iter().filter(|o| !o.is_ok()).count();
        if rejected > 0 {
            log::info!("{} of {} scenarios rejected", rejected, outcomes.len());
        }

        outcomes
    }

    /// Recompute one set of parameters at each annual rate (in percent)
    ///
    /// Outcome ids are the rates as entered, e.g. `"3.5%"`.
    pub fn rate_sweep(&self, base: InvestmentParameters, rates_percent: &[f64]) -> Vec<ScenarioOutcome> {
        let scenarios: Vec<Scenario> = rates_percent
            .iter()
            .map(|&rate| {
                Scenario::new(
                    format!("{}%", rate),
                    InvestmentParameters {
                        annual_interest_rate_percent: rate,
                        ..base
                    },
                )
            })
            .collect();

        self.run_batch(&scenarios)
    }
}
