use std::cmp::Ordering;

use crate::model::CalculationResult;

/// Sort results by final score descending and assign 1-based positional ranks.
///
/// The sort is stable, so equal scores keep their input order. Ties do not
/// share a rank: every position gets the next integer.
pub fn rank_results(mut results: Vec<CalculationResult>) -> Vec<CalculationResult> {
    results.sort_by(|a, b| by_score_descending(a.final_score, b.final_score));
    for (index, result) in results.iter_mut().enumerate() {
        result.rank = index + 1;
    }
    results
}

/// Rank of every score, indexed by input position.
///
/// Same ordering as [`rank_results`], without reordering the input, so
/// entries that share an id are still told apart.
pub fn rank_positions(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| by_score_descending(scores[a], scores[b]));

    let mut ranks = vec![0; scores.len()];
    for (position, index) in order.into_iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

fn by_score_descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
