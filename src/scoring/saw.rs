use crate::model::{CalculationResult, Candidate, Criterion, CriterionType};

use super::engine::{aggregate, finite_or_zero, max_value, min_value};

/// Normalize one raw value given the column's `min` and `max`.
///
/// Benefit: `x / max`, 0 when the max is 0.
/// Cost: `min / x`, 0 when `x` itself is 0.
/// A ratio that overflows is also 0.
pub fn normalize_value(value: f64, min: f64, max: f64, kind: CriterionType) -> f64 {
    let ratio = match kind {
        CriterionType::Benefit => {
            if max == 0.0 {
                0.0
            } else {
                value / max
            }
        }
        CriterionType::Cost => {
            if value == 0.0 {
                0.0
            } else {
                min / value
            }
        }
    };
    finite_or_zero(ratio)
}

/// Normalize a full criterion column, preserving candidate order.
pub fn normalize_column(kind: CriterionType, values: &[f64]) -> Vec<f64> {
    let min = min_value(values);
    let max = max_value(values);
    values
        .iter()
        .map(|&x| normalize_value(x, min, max, kind))
        .collect()
}

/// Rank candidates with Simple Additive Weighting.
pub fn calculate_saw(criteria: &[Criterion], candidates: &[Candidate]) -> Vec<CalculationResult> {
    aggregate(criteria, candidates, normalize_column)
}
