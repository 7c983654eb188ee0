#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an undefined variable, or to assign an undefined name
    /// outside the global frame.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment was not a variable.
    InvalidAssignment {
        /// A description of the node found as the target.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// A rendering of the offending value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// A rendering of the offending value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binary operator symbol the evaluator cannot apply.
    UnknownOperator {
        /// The operator symbol as lexed.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },

            Self::InvalidAssignment { target, line } => {
                write!(f, "Error on line {line}: Cannot assign to {target}.")
            },

            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected number but got {found}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Divide by zero."),

            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: {found} is not a function.")
            },

            Self::UnknownOperator { operator, line } => {
                write!(f, "Error on line {line}: Can't apply operator '{operator}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
