use super::OutputFormat;
use crate::utils::error::{MathError, Result};
use crate::utils::validation::validate_config_path;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional defaults read from a TOML file. Every key may be omitted.
///
/// ```toml
/// value = 7          # or "7", or 2.5
/// operation = "add-ten"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub value: Option<toml::Value>,
    /// Parsed with `Operation::from_str`, so every alias it knows is accepted.
    pub operation: Option<String>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_config_path("config", path)?;

        let content = std::fs::read_to_string(path).map_err(|e| MathError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        tracing::debug!("Loaded config file {}", path.display());
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// The `value` key as operand text, accepting integers, floats or strings.
    pub fn value_text(&self) -> Result<Option<String>> {
        match &self.value {
            None => Ok(None),
            Some(toml::Value::Integer(i)) => Ok(Some(i.to_string())),
            // Debug keeps the fraction (`5.0`), so the operand stays a float.
            Some(toml::Value::Float(f)) => Ok(Some(format!("{:?}", f))),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(MathError::InvalidConfigValueError {
                field: "value".to_string(),
                value: other.to_string(),
                reason: format!("Expected a number or string, found {}", other.type_str()),
            }),
        }
    }
}
