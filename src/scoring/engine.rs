use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::rank::{rank_positions, rank_results};
use super::saw::{self, calculate_saw};
use super::smart::{self, calculate_smart};
use super::weights::normalize_weights;
use crate::model::{CalculationMethod, CalculationResult, Candidate, Criterion, CriterionType};

/// Maps one criterion's raw column (candidate order) to normalized scores.
pub(crate) type NormalizeColumn = fn(CriterionType, &[f64]) -> Vec<f64>;

/// Run the selected method and return results sorted by rank.
///
/// Empty criteria or empty candidates produce an empty list. Degenerate
/// inputs (zero weights, flat criteria, zero values) resolve to 0 rather
/// than failing.
pub fn calculate(
    method: CalculationMethod,
    criteria: &[Criterion],
    candidates: &[Candidate],
) -> Vec<CalculationResult> {
    info!(
        %method,
        criteria = criteria.len(),
        candidates = candidates.len(),
        "calculating ranking"
    );
    match method {
        CalculationMethod::Saw => calculate_saw(criteria, candidates),
        CalculationMethod::Smart => calculate_smart(criteria, candidates),
    }
}

pub(crate) fn min_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Overflowed or undefined ratios count as no contribution.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Shared weighted-sum pass followed by ranking.
pub(crate) fn aggregate(
    criteria: &[Criterion],
    candidates: &[Candidate],
    normalize: NormalizeColumn,
) -> Vec<CalculationResult> {
    rank_results(score_unranked(criteria, candidates, normalize))
}

/// Normalize every criterion column and accumulate `normalized * weight`
/// per candidate in criteria order. Results stay in candidate input order
/// with rank 0.
fn score_unranked(
    criteria: &[Criterion],
    candidates: &[Candidate],
    normalize: NormalizeColumn,
) -> Vec<CalculationResult> {
    if candidates.is_empty() || criteria.is_empty() {
        return Vec::new();
    }

    let weights = normalize_weights(criteria);

    let mut results: Vec<CalculationResult> = candidates
        .iter()
        .map(|candidate| CalculationResult {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            normalized_scores: HashMap::with_capacity(criteria.len()),
            final_score: 0.0,
            rank: 0,
        })
        .collect();

    for (criterion, &weight) in criteria.iter().zip(&weights) {
        let values: Vec<f64> = candidates
            .iter()
            .map(|candidate| candidate.value_for(&criterion.id))
            .collect();
        let normalized = normalize(criterion.kind, &values);

        debug!(
            criterion = %criterion.id,
            kind = %criterion.kind,
            weight,
            min = min_value(&values),
            max = max_value(&values),
            "normalized criterion column"
        );

        for (result, score) in results.iter_mut().zip(normalized) {
            result.normalized_scores.insert(criterion.id.clone(), score);
            result.final_score += score * weight;
        }
    }

    results
}

/// Both methods' outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodComparison {
    pub candidate_id: String,
    pub candidate_name: String,
    pub saw_score: f64,
    pub saw_rank: usize,
    pub smart_score: f64,
    pub smart_rank: usize,
}

/// Run SAW and SMART on the same input. Rows follow candidate input order
/// and are matched by position, so duplicate candidate ids stay distinct.
pub fn compare_methods(criteria: &[Criterion], candidates: &[Candidate]) -> Vec<MethodComparison> {
    info!(
        criteria = criteria.len(),
        candidates = candidates.len(),
        "comparing SAW and SMART"
    );
    let saw = score_unranked(criteria, candidates, saw::normalize_column);
    let smart = score_unranked(criteria, candidates, smart::normalize_column);

    let final_scores = |results: &[CalculationResult]| -> Vec<f64> {
        results.iter().map(|r| r.final_score).collect()
    };
    let saw_ranks = rank_positions(&final_scores(&saw));
    let smart_ranks = rank_positions(&final_scores(&smart));

    saw.into_iter()
        .zip(smart)
        .zip(saw_ranks.into_iter().zip(smart_ranks))
        .map(|((s, m), (saw_rank, smart_rank))| MethodComparison {
            candidate_id: s.candidate_id,
            candidate_name: s.candidate_name,
            saw_score: s.final_score,
            saw_rank,
            smart_score: m.final_score,
            smart_rank,
        })
        .collect()
}
