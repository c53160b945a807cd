use crate::model::{CalculationResult, Candidate, Criterion, CriterionType};

use super::engine::{aggregate, max_value, min_value};

/// Linear utility of a raw value on `[min, max]`.
///
/// A flat criterion (`max == min`) has no discriminating power and yields 0.
/// So does a range too wide to represent (`max - min` overflows).
pub fn utility(value: f64, min: f64, max: f64, kind: CriterionType) -> f64 {
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return 0.0;
    }

    match kind {
        CriterionType::Benefit => (value - min) / range,
        CriterionType::Cost => (max - value) / range,
    }
}

/// Utility for every value in a criterion column, preserving candidate order.
pub fn normalize_column(kind: CriterionType, values: &[f64]) -> Vec<f64> {
    let min = min_value(values);
    let max = max_value(values);
    values.iter().map(|&x| utility(x, min, max, kind)).collect()
}

/// Rank candidates with the Simple Multi-Attribute Rating Technique.
pub fn calculate_smart(criteria: &[Criterion], candidates: &[Candidate]) -> Vec<CalculationResult> {
    aggregate(criteria, candidates, normalize_column)
}
