//! Field transforms and the algorithms that aggregate them into one score.

pub mod algorithm;
pub mod config;
mod distribution;
mod field;
mod record;

pub use algorithm::{AlgorithmRegistry, ScoringAlgorithm, PIKE_EPSILON};
pub use config::{AlgorithmConfig, AlgorithmConfigError, ConfigFormat};
pub use distribution::Distribution;
pub use field::{FieldSpec, FieldSpecError};
pub use record::Record;
