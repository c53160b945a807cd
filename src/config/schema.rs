use serde::{Deserialize, Serialize};

use crate::model::{CalculationMethod, Candidate, Criterion};

/// A dataset file: the criteria, the candidates, and optionally the method to use.
///
/// Example YAML:
/// ```yaml
/// method: SMART
/// criteria:
///   - { id: ipk, name: "GPA", weight: 30, type: benefit }
///   - { id: penghasilan, name: "Parent income", weight: 25, type: cost }
/// candidates:
///   - id: "1"
///     name: Ahmad Rizki
///     values: { ipk: 3.8, penghasilan: 3.5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    /// Default method when `--method` is not given (SAW if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<CalculationMethod>,

    #[serde(default)]
    pub criteria: Vec<Criterion>,

    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Dataset {
    /// The demo scholarship dataset
    pub fn demo() -> Self {
        Self {
            method: Some(CalculationMethod::Saw),
            criteria: crate::data::default_criteria(),
            candidates: crate::data::sample_candidates(),
        }
    }

    /// `--method` wins over the file, the file wins over the default
    pub fn effective_method(&self, cli_method: Option<CalculationMethod>) -> CalculationMethod {
        cli_method.or(self.method).unwrap_or_default()
    }
}
