pub mod types;

pub use types::{CalculationMethod, CalculationResult, Candidate, Criterion, CriterionType};
