//! Input validation for raw investment parameters

mod errors;
mod validator;

pub use errors::{ValidationError, Violation};
pub use validator::{validate, ValidatedParameters};
