use std::collections::HashSet;

use proptest::prelude::{prop, Just, Strategy};
use proptest::{prop_assert, prop_assert_eq, prop_compose, proptest};

use crate::model::{CalculationMethod, Candidate, Criterion, CriterionType};
use crate::scoring::{calculate, saw, smart};

const METHODS: [CalculationMethod; 2] = [CalculationMethod::Saw, CalculationMethod::Smart];

fn kind(benefit: bool) -> CriterionType {
    if benefit {
        CriterionType::Benefit
    } else {
        CriterionType::Cost
    }
}

prop_compose! {
    fn criteria()(specs in prop::collection::vec((0.0..100.0f64, prop::bool::ANY), 1..6)) -> Vec<Criterion> {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (weight, benefit))| {
                let id = format!("c{}", i);
                Criterion::new(&id, &id, weight, kind(benefit))
            })
            .collect()
    }
}

// Sparse values: roughly one in five entries is left out.
prop_compose! {
    fn candidates(criteria_count: usize)(
        rows in prop::collection::vec(
            prop::collection::vec(prop::option::weighted(0.8, 0.0..50.0f64), criteria_count),
            1..12,
        )
    ) -> Vec<Candidate> {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut candidate = Candidate::new(&format!("k{}", i), &format!("Candidate {}", i));
                for (j, value) in row.into_iter().enumerate() {
                    if let Some(value) = value {
                        candidate = candidate.with_value(&format!("c{}", j), value);
                    }
                }
                candidate
            })
            .collect()
    }
}

fn dataset() -> impl Strategy<Value = (Vec<Criterion>, Vec<Candidate>)> {
    criteria().prop_flat_map(|criteria| {
        let count = criteria.len();
        (Just(criteria), candidates(count))
    })
}

proptest! {
    #[test]
    fn ranks_are_dense_and_sorted((criteria, candidates) in dataset()) {
        for method in METHODS {
            let results = calculate(method, &criteria, &candidates);
            prop_assert_eq!(results.len(), candidates.len());

            let ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
            prop_assert_eq!(ranks, (1..=candidates.len()).collect::<Vec<_>>());

            let ids: HashSet<&str> = results.iter().map(|r| r.candidate_id.as_str()).collect();
            prop_assert_eq!(ids.len(), candidates.len());

            for pair in results.windows(2) {
                prop_assert!(pair[0].final_score >= pair[1].final_score);
            }
            prop_assert!(results.iter().all(|r| r.final_score.is_finite()));
        }
    }

    #[test]
    fn equal_scores_keep_input_order((criteria, candidates) in dataset()) {
        for method in METHODS {
            let results = calculate(method, &criteria, &candidates);
            let position = |id: &str| candidates.iter().position(|c| c.id == id);
            for pair in results.windows(2) {
                if pair[0].final_score == pair[1].final_score {
                    prop_assert!(position(&pair[0].candidate_id) < position(&pair[1].candidate_id));
                }
            }
        }
    }

    #[test]
    fn duplicated_candidate_ties_in_input_order(
        (criteria, candidates) in dataset(),
    ) {
        let mut candidates = candidates;
        let twin = Candidate {
            id: "twin".to_string(),
            ..candidates[0].clone()
        };
        candidates.push(twin);

        for method in METHODS {
            let results = calculate(method, &criteria, &candidates);
            let original = results.iter().position(|r| r.candidate_id == candidates[0].id);
            let copy = results.iter().position(|r| r.candidate_id == "twin");
            prop_assert!(original < copy);
        }
    }

    #[test]
    fn weight_scaling_does_not_change_ranking(
        (criteria, candidates) in dataset(),
        factor in prop::sample::select(vec![0.5, 2.0, 4.0, 10.0]),
    ) {
        let scaled: Vec<Criterion> = criteria
            .iter()
            .map(|c| Criterion { weight: c.weight * factor, ..c.clone() })
            .collect();

        for method in METHODS {
            let original = calculate(method, &criteria, &candidates);
            let rescaled = calculate(method, &scaled, &candidates);
            for (a, b) in original.iter().zip(&rescaled) {
                prop_assert!((a.final_score - b.final_score).abs() < 1e-9);
            }
            // Ranks only compared where scores are clearly separated
            for (a, b) in original.iter().zip(&rescaled) {
                let separated = original
                    .iter()
                    .filter(|o| o.candidate_id != a.candidate_id)
                    .all(|o| (o.final_score - a.final_score).abs() > 1e-6);
                if separated {
                    prop_assert_eq!(&a.candidate_id, &b.candidate_id);
                    prop_assert_eq!(a.rank, b.rank);
                }
            }
        }
    }

    #[test]
    fn saw_benefit_max_is_exactly_one(values in prop::collection::vec(0.0..100.0f64, 1..16)) {
        let column = saw::normalize_column(CriterionType::Benefit, &values);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (value, normalized) in values.iter().zip(&column) {
            prop_assert!(*normalized <= 1.0);
            if max > 0.0 && *value == max {
                prop_assert_eq!(*normalized, 1.0);
            }
        }
    }

    #[test]
    fn smart_utilities_within_bounds(
        values in prop::collection::vec(0.0..100.0f64, 2..16),
        benefit in prop::bool::ANY,
    ) {
        let kind = kind(benefit);
        let column = smart::normalize_column(kind, &values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for (value, utility) in values.iter().zip(&column) {
            prop_assert!((0.0..=1.0).contains(utility));
            if max > min {
                let (best, worst) = match kind {
                    CriterionType::Benefit => (max, min),
                    CriterionType::Cost => (min, max),
                };
                if *value == best {
                    prop_assert_eq!(*utility, 1.0);
                }
                if *value == worst {
                    prop_assert_eq!(*utility, 0.0);
                }
            } else {
                prop_assert_eq!(*utility, 0.0);
            }
        }
    }

    #[test]
    fn flat_criterion_is_neutral(
        (criteria, candidates) in dataset(),
        flat_value in 1.0..50.0f64,
        flat_weight in 1.0..100.0f64,
    ) {
        let mut criteria = criteria;
        criteria.push(Criterion::new("flat", "Flat", flat_weight, CriterionType::Benefit));
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| c.with_value("flat", flat_value))
            .collect();

        for result in calculate(CalculationMethod::Smart, &criteria, &candidates) {
            prop_assert_eq!(result.normalized_scores["flat"], 0.0);
        }
        for result in calculate(CalculationMethod::Saw, &criteria, &candidates) {
            prop_assert_eq!(result.normalized_scores["flat"], 1.0);
        }
    }

    #[test]
    fn empty_side_gives_empty_result((criteria, candidates) in dataset()) {
        for method in METHODS {
            prop_assert!(calculate(method, &[], &candidates).is_empty());
            prop_assert!(calculate(method, &criteria, &[]).is_empty());
        }
    }
}
