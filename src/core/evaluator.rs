use crate::config::{OutputFormat, RunConfig};
use crate::math::{Operand, Operation};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// Outcome of one operation applied to one operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub input: Operand,
    pub result: Operand,
}

impl Evaluation {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.result.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

pub struct Evaluator {
    config: RunConfig,
}

impl Evaluator {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self) -> Result<Evaluation> {
        self.config.validate()?;

        let input: Operand = self.config.value.parse()?;
        let operation = self.config.operation;
        tracing::debug!("Applying {} to {}", operation, input);

        let result = operation.apply(input)?;
        tracing::info!("{}({}) = {}", operation, input, result);

        Ok(Evaluation {
            operation,
            input,
            result,
        })
    }

    /// Evaluates and renders in the configured output format.
    pub fn run(&self) -> Result<String> {
        self.evaluate()?.render(self.config.format)
    }
}
