//! Criticality scoring: turn rows of numeric signals into one weighted score
//! per row and emit the rows ranked by that score.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod telemetry;
