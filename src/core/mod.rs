pub mod evaluator;

pub use evaluator::{Evaluation, Evaluator};
