use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, ParseResult},
        token::TokenKind,
    },
};

/// Returns `true` when the next token is the given punctuation character,
/// without consuming it.
pub(in crate::interpreter::parser) fn is_punc(lexer: &mut Lexer<'_>, ch: char) -> ParseResult<bool> {
    Ok(lexer.peek()?.kind.is_punc(ch))
}

/// Returns `true` when the next token is the given keyword, without
/// consuming it.
pub(in crate::interpreter::parser) fn is_keyword(lexer: &mut Lexer<'_>,
                                                word: &str)
                                                -> ParseResult<bool> {
    Ok(lexer.peek()?.kind.is_keyword(word))
}

/// Consumes the next token, which must be the given punctuation character.
///
/// # Errors
/// `ParseError::ExpectedPunctuation` when it is anything else.
pub(in crate::interpreter::parser) fn expect_punc(lexer: &mut Lexer<'_>,
                                                  expected: char)
                                                  -> ParseResult<()> {
    let token = lexer.peek()?;
    if token.kind.is_punc(expected) {
        lexer.next()?;
        Ok(())
    } else {
        Err(ParseError::ExpectedPunctuation { expected,
                                              line: token.line, })
    }
}

/// Consumes the next token, which must be the given keyword.
///
/// # Errors
/// `ParseError::ExpectedKeyword` when it is anything else.
pub(in crate::interpreter::parser) fn expect_keyword(lexer: &mut Lexer<'_>,
                                                     expected: &str)
                                                     -> ParseResult<()> {
    let token = lexer.peek()?;
    if token.kind.is_keyword(expected) {
        lexer.next()?;
        Ok(())
    } else {
        Err(ParseError::ExpectedKeyword { expected: expected.to_string(),
                                          line:     token.line, })
    }
}

/// Parses a delimited, separator-joined list: `start item (sep item)* stop`,
/// with the final separator optional.
///
/// This utility is shared by blocks (`{`/`}`/`;`), call argument lists and
/// lambda parameter lists (`(`/`)`/`,`). An immediately encountered `stop`
/// produces an empty list; the list ends exactly when `stop` is seen, so a
/// trailing separator directly before `stop` is tolerated and anything else
/// is a punctuation error.
///
/// # Parameters
/// - `lexer`: Token stream positioned at `start`.
/// - `start`/`stop`: The bracketing punctuation pair.
/// - `separator`: The punctuation joining the items.
/// - `parse_item`: Function used to parse one element.
///
/// # Returns
/// The parsed items, in source order.
///
/// # Errors
/// Returns a `ParseError` if the brackets or separators are missing, or an
/// item fails to parse.
pub(in crate::interpreter::parser) fn parse_delimited<T>(
    lexer: &mut Lexer<'_>,
    start: char,
    stop: char,
    separator: char,
    mut parse_item: impl FnMut(&mut Lexer<'_>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    let mut first = true;

    expect_punc(lexer, start)?;
    while !lexer.at_end()? {
        if is_punc(lexer, stop)? {
            break;
        }
        if first {
            first = false;
        } else {
            expect_punc(lexer, separator)?;
            // The last separator can be missing.
            if is_punc(lexer, stop)? {
                break;
            }
        }
        items.push(parse_item(lexer)?);
    }
    expect_punc(lexer, stop)?;

    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// `ParseError::ExpectedVariableName` when the next token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_varname(lexer: &mut Lexer<'_>) -> ParseResult<String> {
    let token = lexer.next()?;
    match token.kind {
        TokenKind::Identifier(name) => Ok(name),
        other => Err(ParseError::ExpectedVariableName { found: other.to_string(),
                                                        line:  token.line, }),
    }
}
