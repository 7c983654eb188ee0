//! # mu
//!
//! mu is a tiny dynamically-typed expression language interpreter written in
//! Rust. It lexes, parses, and tree-walks programs built from numbers,
//! strings, booleans, variables, conditionals, lambdas, calls, and binary
//! operators, with lexical scoping and closures.
//!
//! The pipeline is `SourceCursor → Lexer → Parser → AST → evaluate(AST,
//! Environment) → Value`. Embedders construct a global [`interpreter::environment::Environment`],
//! [`interpreter::environment::Environment::define`] host callables into it
//! (an output function, say), and hand the parsed program to
//! [`interpreter::evaluator::evaluate`]. The lexer's position-tagged token
//! stream is also usable on its own, e.g. by syntax highlighters.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::evaluate,
        lexer::Lexer,
        parser::parse_program,
        value::{NativeFunction, Value},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of source code as an immutable tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the cursor, lexer, parser, environment, value
/// types, and evaluator to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into its AST.
///
/// The result is always a `Sequence` node covering the whole program.
///
/// # Errors
/// Returns a located `ParseError` on the first lexical or syntax error.
///
/// # Examples
/// ```
/// use mu_lang::parse;
///
/// assert!(parse("fib = lambda (n) if n < 2 then n else fib(n - 1) + fib(n - 2);").is_ok());
/// assert!(parse("if then").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut lexer = Lexer::new(source);
    parse_program(&mut lexer)
}

/// Defines the default host bindings into an environment.
///
/// Currently that is `println`, which prints each argument on its own line
/// and returns `false`.
pub fn install_builtins(env: &Environment) {
    env.define("println",
               Value::Native(NativeFunction::new("println", |args| {
                                 for arg in args {
                                     println!("{arg}");
                                 }
                                 Ok(Value::FALSE)
                             })));
}

/// Parses and executes a whole program in a fresh global environment.
///
/// This is the embedding shortcut used by the CLI: it builds a global
/// environment, installs the default host bindings, and evaluates the
/// program. With `pipe_mode` set, the program's final value is printed to
/// standard output after execution.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mu_lang::get_result;
///
/// let res = get_result("x = 1; x + 2;", false);
/// assert!(res.is_ok());
///
/// // 'y' is never defined anywhere in the chain.
/// let res = get_result("y + 1;", false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, pipe_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse(source)?;

    let globals = Environment::global();
    install_builtins(&globals);

    let value = evaluate(&program, &globals)?;
    if pipe_mode {
        println!("{value}");
    }

    Ok(())
}
