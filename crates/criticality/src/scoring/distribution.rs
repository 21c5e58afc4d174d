use serde::{Deserialize, Serialize};

/// Curve applied to a normalized field value before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    #[default]
    #[serde(alias = "normal")]
    Linear,
    Zipfian,
}

impl Distribution {
    /// Maps `normalized` in [0, 1] onto [0, 1]. `range` is the width of the
    /// field's bounds and only shapes the zipfian curve.
    ///
    /// Zipfian uses `ln(1 + t * range) / ln(1 + range)`: monotonic, pinned at
    /// 0 and 1, and flattening as `t` grows so large raw values add less.
    pub fn apply(self, normalized: f64, range: f64) -> f64 {
        match self {
            Distribution::Linear => normalized,
            Distribution::Zipfian => {
                if range <= 0.0 {
                    return normalized;
                }
                (normalized * range).ln_1p() / range.ln_1p()
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Distribution::Linear => "linear",
            Distribution::Zipfian => "zipfian",
        }
    }
}
