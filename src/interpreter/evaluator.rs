/// Core evaluation logic.
///
/// Contains the tree-walk dispatch over AST nodes, sequencing, conditionals,
/// assignment, closure creation and function application.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, comparisons, equality, and the (non-short-circuit)
/// logical operators over already-evaluated operands.
pub mod binary;

pub use self::core::{EvalResult, apply_function, evaluate};
