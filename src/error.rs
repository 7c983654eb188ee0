/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, unexpected tokens, and missing punctuation
/// or keywords, each carrying its source location.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, invalid assignment targets, type mismatches, division by zero,
/// and calls to non-function values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
