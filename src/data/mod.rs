//! Built-in scholarship demo dataset, written out by `spk-rank init`.

use crate::model::{Candidate, Criterion, CriterionType};

fn criterion(id: &str, name: &str, weight: f64, kind: CriterionType, description: &str) -> Criterion {
    Criterion {
        description: Some(description.to_string()),
        ..Criterion::new(id, name, weight, kind)
    }
}

pub fn default_criteria() -> Vec<Criterion> {
    vec![
        criterion(
            "ipk",
            "GPA (IPK)",
            30.0,
            CriterionType::Benefit,
            "Cumulative grade point average (0-4 scale)",
        ),
        criterion(
            "penghasilan",
            "Parent income",
            25.0,
            CriterionType::Cost,
            "Parents' monthly income (million rupiah)",
        ),
        criterion(
            "tanggungan",
            "Dependents",
            20.0,
            CriterionType::Benefit,
            "Number of dependents in the family",
        ),
        criterion(
            "prestasi",
            "Achievements",
            15.0,
            CriterionType::Benefit,
            "Academic and non-academic achievements (score 0-10)",
        ),
        criterion(
            "semester",
            "Semester",
            10.0,
            CriterionType::Benefit,
            "Current semester",
        ),
    ]
}

fn candidate(id: &str, name: &str, values: [f64; 5]) -> Candidate {
    let [ipk, penghasilan, tanggungan, prestasi, semester] = values;
    Candidate::new(id, name)
        .with_value("ipk", ipk)
        .with_value("penghasilan", penghasilan)
        .with_value("tanggungan", tanggungan)
        .with_value("prestasi", prestasi)
        .with_value("semester", semester)
}

pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        candidate("1", "Ahmad Rizki", [3.8, 3.5, 4.0, 8.0, 6.0]),
        candidate("2", "Siti Nurhaliza", [3.9, 2.0, 5.0, 9.0, 7.0]),
        candidate("3", "Budi Santoso", [3.5, 5.0, 3.0, 5.0, 5.0]),
        candidate("4", "Dewi Lestari", [3.7, 4.0, 4.0, 7.0, 6.0]),
        candidate("5", "Eko Prasetyo", [3.6, 1.5, 6.0, 6.0, 8.0]),
    ]
}
