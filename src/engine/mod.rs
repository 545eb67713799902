//! Signal fusion and evaluation orchestration.

pub mod evaluator;
pub mod fusion;

pub use evaluator::{EvaluateError, RunPotentialEngine};
