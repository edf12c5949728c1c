//! Investment parameters and batch scenario loading

mod data;
pub mod loader;

pub use data::{InvestmentParameters, CompoundingFrequency, ContributionFrequency, Scenario};
pub use loader::{load_scenarios, load_scenarios_from_reader, LoaderError};
