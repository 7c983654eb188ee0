/// Core parsing logic.
///
/// Contains the program/expression/atom productions: parenthesized
/// expressions, blocks, conditionals, lambdas, literals, and postfix calls.
pub mod core;

/// Binary and assignment operator parsing.
///
/// Implements precedence climbing over the language's fixed operator table.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides the delimited-list helper shared by blocks, argument lists and
/// parameter lists, plus punctuation and keyword expectation helpers.
pub mod utils;

pub use self::core::{parse_expression, parse_program};
