use super::ScoringAlgorithm;
use crate::scoring::config::AlgorithmConfig;
use crate::scoring::field::FieldSpec;
use crate::scoring::record::Record;

pub(super) const NAME: &str = "wam";

/// Weighted arithmetic mean of the fields present in a record:
/// `Σ contributionᵢ / Σ wᵢ`.
#[derive(Debug, Clone)]
pub struct WeightedArithmeticMean {
    fields: Vec<(String, FieldSpec)>,
}

impl WeightedArithmeticMean {
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

impl ScoringAlgorithm for WeightedArithmeticMean {
    fn name(&self) -> &str {
        NAME
    }

    fn score(&self, record: &Record) -> f64 {
        let (sum, total_weight) = self
            .fields
            .iter()
            .filter_map(|(field, spec)| record.get(field).map(|value| (spec, value)))
            .fold((0.0, 0.0), |(sum, weight), (spec, value)| {
                (sum + spec.contribution(Some(value)), weight + spec.weight)
            });

        if total_weight <= 0.0 {
            return 0.0;
        }

        sum / total_weight
    }
}
