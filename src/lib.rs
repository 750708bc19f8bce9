pub mod config;
pub mod core;
pub mod math;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{OutputFormat, RunConfig, TomlConfig};
pub use crate::core::{Evaluation, Evaluator};
pub use math::{add_five, add_ten, checked_add_five, checked_add_ten, Operand, Operation};
pub use utils::error::{MathError, Result};
