use crate::config::ConfigError;
use crate::pipeline::{OpenError, PipelineError};
use crate::scoring::AlgorithmConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Algorithm(AlgorithmConfigError),
    Open(OpenError),
    Pipeline(PipelineError),
}

impl AppError {
    /// Every failure aborts the batch with the same status.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Algorithm(err) => write!(f, "algorithm config error: {}", err),
            AppError::Open(err) => write!(f, "io error: {}", err),
            AppError::Pipeline(err) => write!(f, "scoring error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Algorithm(err) => Some(err),
            AppError::Open(err) => Some(err),
            AppError::Pipeline(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<AlgorithmConfigError> for AppError {
    fn from(value: AlgorithmConfigError) -> Self {
        Self::Algorithm(value)
    }
}

impl From<OpenError> for AppError {
    fn from(value: OpenError) -> Self {
        Self::Open(value)
    }
}

impl From<PipelineError> for AppError {
    fn from(value: PipelineError) -> Self {
        Self::Pipeline(value)
    }
}
