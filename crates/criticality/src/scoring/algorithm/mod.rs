//! Pluggable aggregation of field contributions into a single score.
//!
//! Algorithms are looked up by the name given in [`AlgorithmConfig`] through an
//! explicit [`AlgorithmRegistry`]; there is no process-wide registration.

mod pike;
mod wam;

pub use pike::{Pike, PIKE_EPSILON};
pub use wam::WeightedArithmeticMean;

use super::config::{AlgorithmConfig, AlgorithmConfigError};
use super::record::Record;
use std::collections::BTreeMap;

/// Computes a finite, non-negative score for a record. Implementations are
/// pure: the same record always yields the same score.
pub trait ScoringAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    fn score(&self, record: &Record) -> f64;
}

/// Builds an algorithm bound to a validated config.
pub type AlgorithmFactory = fn(&AlgorithmConfig) -> Box<dyn ScoringAlgorithm>;

#[derive(Clone, Default)]
pub struct AlgorithmRegistry {
    factories: BTreeMap<String, AlgorithmFactory>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every algorithm shipped with the crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(pike::NAME, |config| Box::new(Pike::new(config)));
        registry.register(wam::NAME, |config| {
            Box::new(WeightedArithmeticMean::new(config))
        });
        registry
    }

    /// Adds or replaces the factory for `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: AlgorithmFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn build(
        &self,
        config: &AlgorithmConfig,
    ) -> Result<Box<dyn ScoringAlgorithm>, AlgorithmConfigError> {
        let factory = self
            .factories
            .get(&config.name)
            .ok_or_else(|| AlgorithmConfigError::UnknownAlgorithm(config.name.clone()))?;
        Ok(factory(config))
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithms", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FieldSpec;

    struct Constant;

    impl ScoringAlgorithm for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn score(&self, _record: &Record) -> f64 {
            0.25
        }
    }

    fn config(name: &str) -> AlgorithmConfig {
        AlgorithmConfig::new(name).with_field("x", FieldSpec::new(1.0, 0.0, 10.0))
    }

    #[test]
    fn defaults_include_pike_and_wam() {
        let registry = AlgorithmRegistry::with_defaults();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["pike", "wam"]);

        let pike = registry.build(&config("pike")).expect("pike builds");
        assert_eq!(pike.name(), "pike");
    }

    #[test]
    fn unknown_name_is_a_config_error() {
        let registry = AlgorithmRegistry::with_defaults();
        match registry.build(&config("mystery")) {
            Err(AlgorithmConfigError::UnknownAlgorithm(name)) => assert_eq!(name, "mystery"),
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("unknown algorithm must not fall back"),
        }
    }

    #[test]
    fn custom_algorithms_can_be_registered() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("constant", |_| Box::new(Constant));
        let algorithm = registry.build(&config("constant")).expect("builds");
        assert_eq!(algorithm.score(&Record::new()), 0.25);
        assert!(registry.build(&config("pike")).is_err());
    }
}
