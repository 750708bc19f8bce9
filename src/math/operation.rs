use super::{Operand, FIVE, TEN};
use crate::utils::error::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepts `add-five`, `add_five` or `add5` (and the ten forms) both through
/// [`FromStr`] and through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    #[default]
    #[serde(alias = "add_five", alias = "add5")]
    AddFive,
    #[serde(alias = "add_ten", alias = "add10")]
    AddTen,
}

impl Operation {
    pub fn offset(&self) -> i64 {
        match self {
            Operation::AddFive => i64::from(FIVE),
            Operation::AddTen => i64::from(TEN),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddFive => "add_five",
            Operation::AddTen => "add_ten",
        }
    }

    pub fn apply(&self, operand: Operand) -> Result<Operand> {
        operand.checked_add(self.offset())
    }
}

impl FromStr for Operation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add-five" | "add_five" | "add5" => Ok(Operation::AddFive),
            "add-ten" | "add_ten" | "add10" => Ok(Operation::AddTen),
            _ => Err(MathError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
