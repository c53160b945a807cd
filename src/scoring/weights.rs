use crate::model::Criterion;

/// Sum of the raw criterion weights.
pub fn total_weight(criteria: &[Criterion]) -> f64 {
    criteria.iter().map(|c| c.weight).sum()
}

/// Rescale weights so they sum to 1, in criteria order.
///
/// If the raw weights sum to zero every normalized weight is zero.
pub fn normalize_weights(criteria: &[Criterion]) -> Vec<f64> {
    let total = total_weight(criteria);
    criteria
        .iter()
        .map(|c| if total == 0.0 { 0.0 } else { c.weight / total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CriterionType;

    fn criterion(id: &str, weight: f64) -> Criterion {
        Criterion::new(id, id, weight, CriterionType::Benefit)
    }

    #[test]
    fn test_weights_sum_to_one() {
        let criteria = vec![
            criterion("ipk", 30.0),
            criterion("penghasilan", 25.0),
            criterion("tanggungan", 20.0),
            criterion("prestasi", 15.0),
            criterion("semester", 10.0),
        ];
        let weights = normalize_weights(&criteria);
        assert_eq!(weights, vec![0.3, 0.25, 0.2, 0.15, 0.1]);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_gives_zero_weights() {
        let criteria = vec![criterion("a", 0.0), criterion("b", 0.0)];
        assert_eq!(normalize_weights(&criteria), vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_criteria() {
        assert!(normalize_weights(&[]).is_empty());
        assert_eq!(total_weight(&[]), 0.0);
    }

    #[test]
    fn test_single_weight_becomes_one() {
        let criteria = vec![criterion("only", 7.0)];
        assert_eq!(normalize_weights(&criteria), vec![1.0]);
    }
}
