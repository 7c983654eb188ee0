/// The cursor module owns the raw source text read position.
///
/// Exposes single-character lookahead and consumption with line/column
/// tracking, and a located error constructor. This is the only place that
/// touches the source as a character sequence.
pub mod cursor;
/// The token module defines the lexical vocabulary.
///
/// Declares `Token`, `TokenKind` and `Span` (the immutable records the
/// lexer produces and the parser consumes) plus the fixed keyword set.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw character stream and produces a lazy stream of
/// position-tagged tokens: numbers, strings, identifiers, keywords, operator
/// runs, and punctuation. This is the first stage of interpretation, and its
/// span-tagged output doubles as the feed for syntax highlighters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, value and
///   source span.
/// - Handles comments, escape sequences, and the editor whitespace class.
/// - Reports lexical errors with line and column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// recursive descent, using precedence climbing for binary and assignment
/// operators, and constructs the immutable `Expr` tree.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting located syntax errors.
/// - Handles blocks, conditionals, lambdas, calls and operator precedence.
pub mod parser;
/// The environment module implements the scope-frame chain.
///
/// A frame maps names to values and holds a back-reference to its parent;
/// lookup walks outward, assignment mutates the owning frame, and only the
/// global frame introduces names by assignment.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (numbers, strings, booleans, closures and
/// host-native functions) together with truthiness, numeric coercion and
/// the language's equality rules.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator tree-walks the AST against an environment, implementing
/// sequencing, conditionals, assignment, first-class functions with lexical
/// capture, and the binary operator table.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Creates call frames extending each closure's defining scope.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
