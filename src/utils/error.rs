use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid operand: '{value}' is not a number")]
    InvalidOperand { value: String },

    #[error("Arithmetic overflow: {value} + {offset} does not fit in a 64-bit integer")]
    Overflow { value: i64, offset: i64 },

    #[error("Operand out of range: '{value}' does not fit in a 64-bit integer")]
    OperandOutOfRange { value: String },

    #[error("Unknown operation: '{name}' (expected add-five or add-ten)")]
    UnknownOperation { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl MathError {
    /// Process exit status for this error: 2 for bad input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            MathError::InvalidOperand { .. }
            | MathError::UnknownOperation { .. }
            | MathError::ConfigError { .. }
            | MathError::InvalidConfigValueError { .. }
            | MathError::TomlError(_) => 2,
            MathError::Overflow { .. }
            | MathError::OperandOutOfRange { .. }
            | MathError::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
