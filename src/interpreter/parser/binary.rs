use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Lexer, ParseResult},
        parser::core::parse_atom,
        token::TokenKind,
    },
};

/// Binding strength of a binary operator symbol; higher binds tighter.
///
/// Returns `None` for operator runs that are not in the fixed table (the
/// caller then stops climbing and leaves the token for its own caller, which
/// reports it as unexpected).
///
/// # Example
/// ```
/// use mu_lang::interpreter::parser::binary::operator_precedence;
///
/// assert_eq!(operator_precedence("*"), Some(20));
/// assert!(operator_precedence("*") > operator_precedence("+"));
/// assert_eq!(operator_precedence("<<"), None);
/// ```
#[must_use]
pub fn operator_precedence(op: &str) -> Option<u8> {
    match op {
        "=" => Some(1),
        "||" => Some(2),
        "&&" => Some(3),
        "<" | ">" | "<=" | ">=" | "==" | "!=" => Some(7),
        "+" | "-" => Some(10),
        "*" | "/" | "%" => Some(20),
        _ => None,
    }
}

/// Climbs binary and assignment operators to the right of `left`.
///
/// Classic precedence climbing: while the next token is an operator from the
/// fixed table binding strictly tighter than `min_prec`, consume it, parse
/// the operand atom, and recurse with the operator's own precedence as the
/// new threshold. Equal precedence stops the recursion, so `1 - 2 - 3`
/// associates left via the loop. `=` is right-associative: its recursion
/// threshold is lowered by one so that `x = y = 5` nests to the right, and
/// it builds an `Assign` node instead of a `BinaryOp` (the target's shape is
/// checked by the evaluator, not here).
///
/// # Parameters
/// - `lexer`: Token stream positioned after `left`.
/// - `left`: The already-parsed left operand.
/// - `min_prec`: Precedence threshold; operators must bind strictly tighter.
///
/// # Returns
/// The operator tree extending `left`.
pub fn parse_binary(lexer: &mut Lexer<'_>, mut left: Expr, min_prec: u8) -> ParseResult<Expr> {
    loop {
        let token = lexer.peek()?;
        let (op, prec) = match &token.kind {
            TokenKind::Operator(op) => match operator_precedence(op) {
                Some(prec) if prec > min_prec => (op.clone(), prec),
                _ => break,
            },
            _ => break,
        };
        let line = token.line;
        lexer.next()?;

        let atom = parse_atom(lexer)?;
        let right_min = if op == "=" { prec - 1 } else { prec };
        let right = parse_binary(lexer, atom, right_min)?;

        left = if op == "=" {
            Expr::Assign { target: Box::new(left),
                           value: Box::new(right),
                           line }
        } else {
            Expr::BinaryOp { operator: op,
                             left: Box::new(left),
                             right: Box::new(right),
                             line }
        };
    }

    Ok(left)
}
