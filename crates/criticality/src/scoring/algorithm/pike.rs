use super::ScoringAlgorithm;
use crate::scoring::config::AlgorithmConfig;
use crate::scoring::field::FieldSpec;
use crate::scoring::record::Record;

pub(super) const NAME: &str = "pike";

/// Offset added to each shaped value before taking its logarithm so that a
/// zero-valued field pulls the mean down instead of collapsing it to zero.
pub const PIKE_EPSILON: f64 = 1e-9;

/// Weighted geometric mean of the shaped field values present in a record:
/// `exp(Σ wᵢ·ln(vᵢ + ε) / Σ wᵢ)`.
#[derive(Debug, Clone)]
pub struct Pike {
    fields: Vec<(String, FieldSpec)>,
}

impl Pike {
    pub fn new(config: &AlgorithmConfig) -> Self {
        Self {
            fields: config
                .fields
                .iter()
                .map(|(name, spec)| (name.clone(), spec.clone()))
                .collect(),
        }
    }
}

impl ScoringAlgorithm for Pike {
    fn name(&self) -> &str {
        NAME
    }

    fn score(&self, record: &Record) -> f64 {
        let mut weighted_log = 0.0;
        let mut total_weight = 0.0;

        for (field, spec) in &self.fields {
            if spec.weight <= 0.0 {
                continue;
            }
            if let Some(value) = spec.shaped(record.get(field)) {
                weighted_log += spec.weight * (value + PIKE_EPSILON).ln();
                total_weight += spec.weight;
            }
        }

        if total_weight <= 0.0 {
            return 0.0;
        }

        (weighted_log / total_weight).exp()
    }
}
