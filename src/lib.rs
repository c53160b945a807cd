//! Rank candidates against weighted benefit/cost criteria with SAW
//! (Simple Additive Weighting) or SMART (Simple Multi-Attribute Rating
//! Technique).
//!
//! The scoring engine is a set of pure functions:
//!
//! ```
//! use spk_rank::model::{CalculationMethod, Candidate, Criterion, CriterionType};
//!
//! let criteria = vec![
//!     Criterion::new("a", "A", 50.0, CriterionType::Benefit),
//!     Criterion::new("b", "B", 50.0, CriterionType::Cost),
//! ];
//! let candidates = vec![
//!     Candidate::new("x", "X").with_value("a", 10.0).with_value("b", 2.0),
//!     Candidate::new("y", "Y").with_value("a", 5.0).with_value("b", 1.0),
//! ];
//!
//! let results = spk_rank::calculate(CalculationMethod::Saw, &criteria, &candidates);
//! assert_eq!(results[0].candidate_id, "x");
//! assert_eq!(results[0].rank, 1);
//! ```

pub mod config;
pub mod data;
pub mod model;
pub mod output;
pub mod scoring;

pub use scoring::calculate;
