use crate::utils::error::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A number read at runtime: integer when the text is integral, float otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
}

impl Operand {
    /// Adds an integer offset. Integer addition is checked; floats are not.
    pub fn checked_add(self, offset: i64) -> Result<Operand> {
        match self {
            Operand::Int(value) => super::checked_add(value, offset).map(Operand::Int),
            Operand::Float(value) => Ok(Operand::Float(value + offset as f64)),
        }
    }
}

impl FromStr for Operand {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || MathError::InvalidOperand {
            value: s.to_string(),
        };

        if text.is_empty() {
            return Err(invalid());
        }

        match text.parse::<i64>() {
            Ok(value) => return Ok(Operand::Int(value)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(MathError::OperandOutOfRange {
                    value: text.to_string(),
                });
            }
            Err(_) => {}
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Operand::Float(value)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(value) => write!(f, "{}", value),
            Operand::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}
