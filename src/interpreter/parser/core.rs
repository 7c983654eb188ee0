use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, ParseResult},
        parser::{
            binary::parse_binary,
            utils::{expect_keyword, expect_punc, is_keyword, is_punc, parse_delimited,
                    parse_varname},
        },
        token::TokenKind,
    },
};

/// Parses a whole program: zero or more expressions separated by `;`, the
/// trailing separator optional, until the end of input.
///
/// The result is always a `Sequence` node, even for a single expression;
/// an empty program is an empty sequence (which evaluates to `false`).
///
/// # Errors
/// Any lexical or syntax error, located at the offending token.
pub fn parse_program(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut exprs = Vec::new();

    while !lexer.at_end()? {
        exprs.push(parse_expression(lexer)?);
        if !lexer.at_end()? {
            expect_punc(lexer, ';')?;
        }
    }

    Ok(Expr::Sequence { exprs, line: 1 })
}

/// Parses one expression: an atom (with any postfix calls) extended by
/// binary and assignment operators.
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let atom = parse_atom(lexer)?;
    parse_binary(lexer, atom, 0)
}

/// Parses an atom, then reinterprets it as a call for as long as it is
/// immediately followed by `(`, so `f(1)(2)` chains.
pub(in crate::interpreter::parser) fn parse_atom(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut expr = parse_atom_inner(lexer)?;
    while is_punc(lexer, '(')? {
        expr = parse_call(lexer, expr)?;
    }
    Ok(expr)
}

/// Parses one atom-starting production:
/// parenthesized expression, block, `if`, boolean, lambda, or a bare
/// number/string/identifier token.
fn parse_atom_inner(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    if is_punc(lexer, '(')? {
        lexer.next()?;
        let expr = parse_expression(lexer)?;
        expect_punc(lexer, ')')?;
        return Ok(expr);
    }
    if is_punc(lexer, '{')? {
        return parse_block(lexer);
    }
    if is_keyword(lexer, "if")? {
        return parse_if(lexer);
    }
    if is_keyword(lexer, "true")? || is_keyword(lexer, "false")? {
        return parse_bool(lexer);
    }
    if is_keyword(lexer, "lambda")? || is_keyword(lexer, "λ")? {
        return parse_lambda(lexer);
    }

    let token = lexer.next()?;
    let line = token.line;
    match token.kind {
        TokenKind::Number(value) => Ok(Expr::NumberLit { value, line }),
        TokenKind::Str(value) => Ok(Expr::StringLit { value, line }),
        TokenKind::Identifier(name) => Ok(Expr::VarRef { name, line }),
        TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput { line }),
        other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                   line }),
    }
}

/// Parses a `{ … }` block: expressions separated by `;`, trailing `;`
/// optional.
///
/// An empty block becomes the `false` literal and a single-element block
/// collapses to that element; only larger blocks produce a `Sequence`.
fn parse_block(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = lexer.peek()?.line;
    let mut exprs = parse_delimited(lexer, '{', '}', ';', parse_expression)?;

    match exprs.len() {
        0 => Ok(Expr::BoolLit { value: false,
                                line }),
        1 => Ok(exprs.remove(0)),
        _ => Ok(Expr::Sequence { exprs, line }),
    }
}

/// Parses an `if` expression.
///
/// Syntax:
/// ```text
///     if <condition> then <consequent> [else <alternative>]
///     if <condition> { … }            [else <alternative>]
/// ```
/// The `then` keyword is required exactly when the consequent is not a
/// `{`-block; the `else` branch is optional.
fn parse_if(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = lexer.peek()?.line;
    expect_keyword(lexer, "if")?;

    let condition = parse_expression(lexer)?;
    if !is_punc(lexer, '{')? {
        expect_keyword(lexer, "then")?;
    }
    let then_branch = parse_expression(lexer)?;

    let else_branch = if is_keyword(lexer, "else")? {
        lexer.next()?;
        Some(Box::new(parse_expression(lexer)?))
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch,
                  line })
}

/// Parses a lambda: the `lambda` keyword (or its `λ` glyph), a parenthesized
/// comma-separated parameter list, then a body expression.
fn parse_lambda(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = lexer.next()?.line;
    let params = parse_delimited(lexer, '(', ')', ',', parse_varname)?;
    let body = parse_expression(lexer)?;

    Ok(Expr::Lambda { params,
                      body: Box::new(body),
                      line })
}

/// Parses a `true` or `false` keyword token.
fn parse_bool(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let token = lexer.next()?;
    Ok(Expr::BoolLit { value: token.kind.is_keyword("true"),
                       line:  token.line, })
}

/// Parses a call: `callee` applied to a parenthesized, comma-separated
/// argument list.
fn parse_call(lexer: &mut Lexer<'_>, callee: Expr) -> ParseResult<Expr> {
    let line = lexer.peek()?.line;
    let arguments = parse_delimited(lexer, '(', ')', ',', parse_expression)?;

    Ok(Expr::Call { callee: Box::new(callee),
                    arguments,
                    line })
}
