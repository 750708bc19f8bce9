use crate::utils::error::{MathError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Config files must be named `*.toml`; anything else is rejected before reading.
pub fn validate_config_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();
    if shown.is_empty() {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown,
            reason: "Path cannot be empty".to_string(),
        });
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        _ => Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown,
            reason: "Config file must have a .toml extension".to_string(),
        }),
    }
}
