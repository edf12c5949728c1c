//! Load batches of scenarios from CSV
//!
//! Expected header (the `scenario_id` column is optional):
//! `scenario_id,initial_investment,annual_interest_rate_percent,compounding_frequency,contribution_amount,contribution_frequency,duration_months`
//!
//! Empty numeric cells load as NaN so the validator reports them at compute
//! time, the same way an empty form field is reported.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::Reader;
use thiserror::Error;

use super::{CompoundingFrequency, ContributionFrequency, InvestmentParameters, Scenario};
use crate::validation::ValidationError;

/// Errors raised while reading a scenario file
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    scenario_id: Option<String>,
    initial_investment: Option<f64>,
    annual_interest_rate_percent: Option<f64>,
    compounding_frequency: String,
    contribution_amount: Option<f64>,
    contribution_frequency: String,
    duration_months: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<Scenario, ValidationError> {
        let compounding_frequency: CompoundingFrequency = self.compounding_frequency.parse()?;
        let contribution_frequency: ContributionFrequency = self.contribution_frequency.parse()?;

        let id = match self.scenario_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => row.to_string(),
        };

        Ok(Scenario {
            id,
            params: InvestmentParameters {
                initial_investment: self.initial_investment.unwrap_or(f64::NAN),
                annual_interest_rate_percent: self.annual_interest_rate_percent.unwrap_or(f64::NAN),
                compounding_frequency,
                contribution_amount: self.contribution_amount.unwrap_or(f64::NAN),
                contribution_frequency,
                duration_months: self.duration_months.unwrap_or(f64::NAN),
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (file, stdin, in-memory buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, LoaderError> {
    let mut reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let scenario = row
            .into_scenario(idx + 1)
            .map_err(|source| LoaderError::Row { row: idx + 1, source })?;
        scenarios.push(scenario);
    }

    Ok(scenarios)
}
