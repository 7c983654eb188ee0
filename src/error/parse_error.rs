#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character it cannot handle.
    Lexical {
        /// What went wrong, e.g. `can't handle character '§'`.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        col:     usize,
    },
    /// Found a token no atom-starting production matches.
    UnexpectedToken {
        /// A rendering of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A required punctuation character was absent.
    ExpectedPunctuation {
        /// The punctuation character that was expected.
        expected: char,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A required keyword was absent.
    ExpectedKeyword {
        /// The keyword that was expected.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A lambda parameter list contained something other than a name.
    ExpectedVariableName {
        /// A rendering of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical { message, line, col } => {
                write!(f, "Error on line {line}, column {col}: {message}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::ExpectedPunctuation { expected, line } => {
                write!(f, "Error on line {line}: Expecting punctuation '{expected}'.")
            },

            Self::ExpectedKeyword { expected, line } => {
                write!(f, "Error on line {line}: Expecting keyword '{expected}'.")
            },

            Self::ExpectedVariableName { found, line } => {
                write!(f, "Error on line {line}: Expecting variable name, found {found}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
