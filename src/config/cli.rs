use super::{OutputFormat, RunConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "oop-math")]
#[command(about = "Add five or ten to a number")]
#[command(version)]
pub struct CliConfig {
    /// Number to operate on [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Operation to apply: add-five or add-ten [default: add-five]
    #[arg(long)]
    pub operation: Option<String>,

    /// Output format: plain or json [default: plain]
    #[arg(long)]
    pub format: Option<String>,

    /// TOML file supplying defaults for the flags above
    #[arg(long, env = "OOP_MATH_CONFIG")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut run = RunConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            run = run.merge_toml(&file)?;
        }

        if let Some(value) = &self.value {
            run.value = value.clone();
        }
        if let Some(operation) = &self.operation {
            run.operation = operation.parse()?;
        }
        if let Some(format) = &self.format {
            run.format = format.parse::<OutputFormat>()?;
        }

        Ok(run)
    }
}
