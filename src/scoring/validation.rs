use std::collections::HashSet;

use crate::model::{Candidate, Criterion};

/// Check a dataset before it is handed to an engine.
/// Returns all validation errors at once (not just the first).
///
/// The engines themselves accept anything; these are the caller-side
/// preconditions (unique ids, usable weights, finite values).
pub fn validate_dataset(criteria: &[Criterion], candidates: &[Candidate]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if criteria.is_empty() {
        errors.push("criteria: at least one criterion is required".to_string());
    }
    if candidates.is_empty() {
        errors.push("candidates: at least one candidate is required".to_string());
    }

    let mut seen_criteria = HashSet::new();
    for (i, criterion) in criteria.iter().enumerate() {
        if criterion.id.trim().is_empty() {
            errors.push(format!("criteria[{}].id: must not be empty", i));
        } else if !seen_criteria.insert(criterion.id.as_str()) {
            errors.push(format!(
                "criteria[{}].id: duplicate id '{}'",
                i, criterion.id
            ));
        }
        if criterion.name.trim().is_empty() {
            errors.push(format!("criteria[{}].name: must not be empty", i));
        }
        if !criterion.weight.is_finite() {
            errors.push(format!(
                "criteria[{}].weight: must be a finite number, got {}",
                i, criterion.weight
            ));
        } else if criterion.weight < 0.0 {
            errors.push(format!(
                "criteria[{}].weight: must be non-negative, got {}",
                i, criterion.weight
            ));
        }
    }

    let mut seen_candidates = HashSet::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if candidate.id.trim().is_empty() {
            errors.push(format!("candidates[{}].id: must not be empty", i));
        } else if !seen_candidates.insert(candidate.id.as_str()) {
            errors.push(format!(
                "candidates[{}].id: duplicate id '{}'",
                i, candidate.id
            ));
        }

        // Sorted so the report is stable across runs
        let mut keys: Vec<&String> = candidate.values.keys().collect();
        keys.sort();
        for key in keys {
            let value = candidate.values[key];
            if !value.is_finite() {
                errors.push(format!(
                    "candidates[{}].values.{}: must be a finite number, got {}",
                    i, key, value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Value keys that match no criterion. The engines ignore these, so they
/// are reported as warnings rather than errors.
pub fn unknown_value_keys(criteria: &[Criterion], candidates: &[Candidate]) -> Vec<String> {
    let known: HashSet<&str> = criteria.iter().map(|c| c.id.as_str()).collect();
    let mut warnings = Vec::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let mut unknown: Vec<&str> = candidate
            .values
            .keys()
            .map(String::as_str)
            .filter(|k| !known.contains(k))
            .collect();
        unknown.sort_unstable();
        for key in unknown {
            warnings.push(format!(
                "candidates[{}].values.{}: no criterion with this id, value is ignored",
                i, key
            ));
        }
    }

    warnings
}
