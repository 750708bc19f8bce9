#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::math::Operation;
use crate::utils::error::{MathError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_VALUE: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(MathError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Expected plain or json".to_string(),
            }),
        }
    }
}

/// Fully resolved settings for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Raw operand text; parsed when the evaluation runs.
    pub value: String,
    pub operation: Operation,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE.to_string(),
            operation: Operation::default(),
            format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn merge_toml(mut self, file: &TomlConfig) -> Result<Self> {
        if let Some(value) = file.value_text()? {
            self.value = value;
        }
        if let Some(operation) = &file.operation {
            self.operation = operation.parse()?;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        Ok(self)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("value", &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let config = RunConfig::default();
        assert_eq!(config.value, "5");
        assert_eq!(config.operation, Operation::AddFive);
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_value_fails_validation() {
        let config = RunConfig {
            value: " ".to_string(),
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(MathError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_merge_toml_operation_aliases() {
        for (text, expected) in [
            ("add_five", Operation::AddFive),
            ("add5", Operation::AddFive),
            ("add_ten", Operation::AddTen),
            ("add10", Operation::AddTen),
        ] {
            let file = TomlConfig::from_str(&format!("operation = \"{}\"", text)).unwrap();
            let merged = RunConfig::default().merge_toml(&file).unwrap();
            assert_eq!(merged.operation, expected, "alias {:?}", text);
        }
    }

    #[test]
    fn test_merge_toml_unknown_operation() {
        let file = TomlConfig::from_str("operation = \"add-six\"").unwrap();
        let err = RunConfig::default().merge_toml(&file).unwrap_err();
        assert!(matches!(err, MathError::UnknownOperation { ref name } if name == "add-six"));
    }

    #[test]
    fn test_merge_toml_float_value_stays_float() {
        let file = TomlConfig::from_str("value = 5.0").unwrap();
        let merged = RunConfig::default().merge_toml(&file).unwrap();
        assert_eq!(merged.value, "5.0");
        assert_eq!(
            merged.value.parse::<crate::math::Operand>().unwrap(),
            crate::math::Operand::Float(5.0)
        );
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let file = TomlConfig::from_str("value = 7\noperation = \"add-ten\"\n").unwrap();
        let merged = RunConfig::default().merge_toml(&file).unwrap();
        assert_eq!(merged.value, "7");
        assert_eq!(merged.operation, Operation::AddTen);
        assert_eq!(merged.format, OutputFormat::Plain);
    }
}
