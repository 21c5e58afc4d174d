use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(Self::Production),
            "test" | "ci" => Ok(Self::Test),
            "dev" | "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(value.to_string())),
        }
    }
}

/// Process-level settings for a scoring run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var("SCORER_ENV") {
            Ok(value) => AppEnvironment::parse(&value)?,
            Err(_) => AppEnvironment::Development,
        };

        let log_level = env::var("SCORER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                format: LogFormat::for_environment(environment),
            },
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn override_with(
        &mut self,
        log_level: Option<String>,
        environment: Option<AppEnvironment>,
    ) {
        if let Some(environment) = environment {
            self.environment = environment;
            self.telemetry.format = LogFormat::for_environment(environment);
        }
        if let Some(level) = log_level {
            self.telemetry.log_level = level;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Full,
}

impl LogFormat {
    fn for_environment(environment: AppEnvironment) -> Self {
        match environment {
            AppEnvironment::Production => Self::Full,
            AppEnvironment::Development | AppEnvironment::Test => Self::Compact,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEnvironment(value) => write!(
                f,
                "SCORER_ENV must be one of development, test, production (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
