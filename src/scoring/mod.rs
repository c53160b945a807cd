pub mod engine;
pub mod rank;
pub mod saw;
pub mod smart;
#[cfg(test)]
mod test;
pub mod validation;
pub mod weights;

pub use engine::{calculate, compare_methods, MethodComparison};
pub use rank::{rank_positions, rank_results};
pub use saw::calculate_saw;
pub use smart::calculate_smart;
pub use validation::{unknown_value_keys, validate_dataset};
pub use weights::{normalize_weights, total_weight};
