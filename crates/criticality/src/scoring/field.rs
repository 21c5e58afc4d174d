use super::distribution::Distribution;
use serde::{Deserialize, Serialize};

/// Scoring configuration for a single named signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub lower: f64,
    pub upper: f64,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub smaller_is_better: bool,
}

fn default_weight() -> f64 {
    1.0
}

/// Reasons a single field configuration is rejected at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldSpecError {
    #[error("weight {0} must be a finite, non-negative number")]
    InvalidWeight(f64),
    #[error("bounds must be finite (lower {lower}, upper {upper})")]
    NonFiniteBounds { lower: f64, upper: f64 },
    #[error("upper bound {upper} is below lower bound {lower}")]
    InvertedBounds { lower: f64, upper: f64 },
    #[error("bound range overflows (lower {lower}, upper {upper})")]
    NonFiniteRange { lower: f64, upper: f64 },
}

impl FieldSpec {
    pub fn new(weight: f64, lower: f64, upper: f64) -> Self {
        Self {
            weight,
            lower,
            upper,
            distribution: Distribution::Linear,
            smaller_is_better: false,
        }
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn smaller_is_better(mut self) -> Self {
        self.smaller_is_better = true;
        self
    }

    pub fn validate(&self) -> Result<(), FieldSpecError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(FieldSpecError::InvalidWeight(self.weight));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(FieldSpecError::NonFiniteBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.upper < self.lower {
            return Err(FieldSpecError::InvertedBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !self.range().is_finite() {
            return Err(FieldSpecError::NonFiniteRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    fn range(&self) -> f64 {
        self.upper - self.lower
    }

    /// Clamps `raw` into the bounds, flips it when smaller is better, and
    /// scales it linearly to [0, 1]. A zero-width range is fully satisfied.
    pub fn normalize(&self, raw: f64) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 1.0;
        }

        let clamped = raw.clamp(self.lower, self.upper);
        let oriented = if self.smaller_is_better {
            self.upper - (clamped - self.lower)
        } else {
            clamped
        };

        ((oriented - self.lower) / range).clamp(0.0, 1.0)
    }

    /// Normalized value passed through the configured curve, before weighting.
    /// `None` when the record has no usable value for this field.
    pub fn shaped(&self, raw: Option<f64>) -> Option<f64> {
        raw.map(|value| self.distribution.apply(self.normalize(value), self.range()))
    }

    /// Weighted contribution of one field; absent values contribute zero.
    pub fn contribution(&self, raw: Option<f64>) -> f64 {
        self.shaped(raw)
            .map(|shaped| shaped * self.weight)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(lower: f64, upper: f64) -> FieldSpec {
        FieldSpec::new(1.0, lower, upper)
    }

    #[test]
    fn midpoint_contributes_half() {
        let spec = linear(0.0, 10.0);
        assert!((spec.contribution(Some(5.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn absent_value_contributes_nothing() {
        let spec = linear(0.0, 10.0);
        assert_eq!(spec.contribution(None), 0.0);
        assert!(spec.shaped(None).is_none());
    }

    #[test]
    fn out_of_range_values_clamp_to_nearest_bound() {
        let spec = linear(2.0, 8.0).with_distribution(Distribution::Zipfian);
        for raw in [-100.0_f64, 0.0, 1.99, 8.01, 42.0, 1e12] {
            let clamped = raw.clamp(2.0, 8.0);
            assert_eq!(spec.contribution(Some(raw)), spec.contribution(Some(clamped)));
        }
    }

    #[test]
    fn contribution_grows_with_raw_value() {
        for distribution in [Distribution::Linear, Distribution::Zipfian] {
            let spec = linear(0.0, 50.0).with_distribution(distribution);
            let mut previous = f64::MIN;
            for raw in -5..=60 {
                let value = spec.contribution(Some(raw as f64));
                assert!(value >= previous, "{distribution:?} dipped at {raw}");
                previous = value;
            }
        }
    }

    #[test]
    fn smaller_is_better_reverses_direction() {
        let spec = linear(0.0, 100.0).smaller_is_better();
        let mut previous = f64::MAX;
        for raw in 0..=100 {
            let value = spec.contribution(Some(raw as f64));
            assert!(value <= previous);
            previous = value;
        }

        let forward = linear(0.0, 100.0);
        assert_eq!(
            spec.contribution(Some(0.0)),
            forward.contribution(Some(100.0))
        );
        assert_eq!(spec.contribution(Some(0.0)), 1.0);
    }

    #[test]
    fn degenerate_bounds_are_fully_satisfied() {
        let spec = linear(3.0, 3.0);
        for raw in [-10.0, 3.0, 99.0] {
            assert_eq!(spec.normalize(raw), 1.0);
        }
        let zipf = linear(3.0, 3.0).with_distribution(Distribution::Zipfian);
        assert_eq!(zipf.contribution(Some(0.0)), 1.0);
    }

    #[test]
    fn weight_scales_contribution() {
        let spec = FieldSpec::new(4.0, 0.0, 10.0);
        assert!((spec.contribution(Some(2.5)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_negative_weight_and_inverted_bounds() {
        assert_eq!(
            FieldSpec::new(-1.0, 0.0, 1.0).validate(),
            Err(FieldSpecError::InvalidWeight(-1.0))
        );
        assert_eq!(
            FieldSpec::new(1.0, 5.0, 1.0).validate(),
            Err(FieldSpecError::InvertedBounds {
                lower: 5.0,
                upper: 1.0
            })
        );
        assert!(matches!(
            FieldSpec::new(1.0, 0.0, f64::INFINITY).validate(),
            Err(FieldSpecError::NonFiniteBounds { .. })
        ));
        assert!(FieldSpec::new(0.0, 1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bounds_whose_width_overflows() {
        assert_eq!(
            FieldSpec::new(1.0, -1e308, 1e308).validate(),
            Err(FieldSpecError::NonFiniteRange {
                lower: -1e308,
                upper: 1e308
            })
        );
        let wide = FieldSpec::new(1.0, -1e307, 1e307);
        assert!(wide.validate().is_ok());
        for raw in [-1e307, 0.0, 1e307] {
            let value = wide.contribution(Some(raw));
            assert!(value.is_finite() && (0.0..=1.0).contains(&value));
        }
        assert!((wide.contribution(Some(0.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn yaml_defaults_fill_optional_keys() {
        let spec: FieldSpec = serde_yaml::from_str("upper: 120\ndistribution: zipfian\n")
            .expect("field parses");
        assert_eq!(spec.weight, 1.0);
        assert_eq!(spec.lower, 0.0);
        assert_eq!(spec.upper, 120.0);
        assert_eq!(spec.distribution, Distribution::Zipfian);
        assert!(!spec.smaller_is_better);
    }
}
