use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw value is better
    Benefit,
    /// Lower raw value is better
    Cost,
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "benefit"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: CriterionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Criterion {
    pub fn new(id: &str, name: &str, weight: f64, kind: CriterionType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            weight,
            kind,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// Raw values keyed by criterion id. Sparse: a missing key means 0.
    #[serde(default)]
    pub values: HashMap<String, f64>,
}

impl Candidate {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            values: HashMap::new(),
        }
    }

    /// Builder-style helper for setting one raw value
    pub fn with_value(mut self, criterion_id: &str, value: f64) -> Self {
        self.values.insert(criterion_id.to_string(), value);
        self
    }

    /// Raw value for a criterion, 0 when the candidate has no entry for it.
    /// NaN is read as missing.
    pub fn value_for(&self, criterion_id: &str) -> f64 {
        self.values
            .get(criterion_id)
            .copied()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    }
}

/// One ranked row produced by an engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub candidate_id: String,
    pub candidate_name: String,
    pub normalized_scores: HashMap<String, f64>,
    pub final_score: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculationMethod {
    /// Simple Additive Weighting
    #[default]
    Saw,
    /// Simple Multi-Attribute Rating Technique
    Smart,
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::Saw => write!(f, "SAW"),
            CalculationMethod::Smart => write!(f, "SMART"),
        }
    }
}
