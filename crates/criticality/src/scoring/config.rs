use super::field::{FieldSpec, FieldSpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Algorithm name plus the per-field scoring rules, loaded once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgorithmConfig {
    #[serde(rename = "algorithm")]
    pub name: String,
    pub fields: BTreeMap<String, FieldSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// JSON for `.json` files, YAML for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AlgorithmConfigError {
    #[error("failed to read algorithm config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid YAML algorithm config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON algorithm config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("algorithm config defines no fields")]
    NoFields,
    #[error("algorithm config has no field with a positive weight")]
    NoPositiveWeight,
    #[error("field '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: FieldSpecError,
    },
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl AlgorithmConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AlgorithmConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, ConfigFormat::from_path(path))
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: ConfigFormat,
    ) -> Result<Self, AlgorithmConfigError> {
        let config: Self = match format {
            ConfigFormat::Yaml => serde_yaml::from_reader(reader)?,
            ConfigFormat::Json => serde_json::from_reader(reader)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlgorithmConfigError> {
        if self.fields.is_empty() {
            return Err(AlgorithmConfigError::NoFields);
        }

        for (field, spec) in &self.fields {
            spec.validate()
                .map_err(|source| AlgorithmConfigError::InvalidField {
                    field: field.clone(),
                    source,
                })?;
        }

        if !self.fields.values().any(|spec| spec.weight > 0.0) {
            return Err(AlgorithmConfigError::NoPositiveWeight);
        }

        Ok(())
    }
}
