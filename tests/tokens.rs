use mu_lang::interpreter::{
    lexer::Lexer,
    token::{Token, TokenKind},
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).tokenize_all()
                      .unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                      .into_iter()
                      .map(|t| t.kind)
                      .collect()
}

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
                      .unwrap_or_else(|e| panic!("Lexing failed: {e}"))
}

#[test]
fn call_expression_token_stream() {
    assert_eq!(kinds("println(2 + 3 * 4);"),
               vec![TokenKind::Identifier("println".to_string()),
                    TokenKind::Punctuation('('),
                    TokenKind::Number(2.0),
                    TokenKind::Operator("+".to_string()),
                    TokenKind::Number(3.0),
                    TokenKind::Operator("*".to_string()),
                    TokenKind::Number(4.0),
                    TokenKind::Punctuation(')'),
                    TokenKind::Punctuation(';')]);
}

#[test]
fn spans_cover_the_source_without_overlap() {
    let source = "x = 1; # set it\nprintln(\"a\\\"b\", x <= 2);\u{00A0}y";
    let tokens = tokens(source);

    let mut pos = 0;
    for token in &tokens {
        // Monotonically non-decreasing, non-overlapping intervals.
        assert!(token.span.start >= pos,
                "span {:?} overlaps the previous token", token.span);
        assert!(token.span.end > token.span.start || token.kind == TokenKind::EndOfInput);

        // Whatever the lexer skipped between tokens is whitespace or comment.
        let gap = &source[pos..token.span.start];
        assert!(gap.chars()
                   .next()
                   .is_none_or(|ch| matches!(ch, ' ' | '\n' | '\t' | '\u{00A0}' | '#')),
                "unexpected gap {gap:?}");

        pos = token.span.end;
    }

    // Re-inserting the skipped gaps reconstructs the source exactly.
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &tokens {
        rebuilt.push_str(&source[cursor..token.span.start]);
        rebuilt.push_str(token.span.text(source));
        cursor = token.span.end;
    }
    rebuilt.push_str(&source[cursor..]);
    assert_eq!(rebuilt, source);
}

#[test]
fn peek_caches_a_single_token() {
    let mut lexer = Lexer::new("a + b");

    let peeked = lexer.peek().unwrap().clone();
    assert_eq!(lexer.peek().unwrap().clone(), peeked);
    assert_eq!(lexer.next().unwrap(), peeked);

    assert_eq!(lexer.next().unwrap().kind, TokenKind::Operator("+".to_string()));
    assert!(!lexer.at_end().unwrap());
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Identifier("b".to_string()));
    assert!(lexer.at_end().unwrap());
    // The stream keeps yielding the end-of-input token once drained.
    assert_eq!(lexer.next().unwrap().kind, TokenKind::EndOfInput);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::EndOfInput);
}

#[test]
fn string_values_keep_escape_pairs_and_drop_quotes() {
    let source = r#""a\"b""#;
    let tokens = tokens(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Str(r#"a\"b"#.to_string()));
    // The span still covers the whole literal, quotes included.
    assert_eq!(tokens[0].span.text(source), source);
}

#[test]
fn unterminated_strings_end_at_the_input() {
    assert_eq!(kinds("\"abc"), vec![TokenKind::Str("abc".to_string())]);
}

#[test]
fn numbers_take_at_most_one_dot() {
    assert_eq!(kinds("3.14"), vec![TokenKind::Number(3.14)]);

    // The scan stops at the second dot instead of erroring; the stray dot
    // itself is then an unrecognized character.
    let mut lexer = Lexer::new("12.34.5");
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Number(12.34));
    let err = lexer.next().expect_err("the stray dot is not lexable");
    assert_eq!(err.to_string(),
               "Error on line 1, column 6: can't handle character '.'.");
}

#[test]
fn keywords_are_reclassified_identifiers() {
    assert_eq!(kinds("if iffy λ lambdaish"),
               vec![TokenKind::Keyword("if".to_string()),
                    TokenKind::Identifier("iffy".to_string()),
                    TokenKind::Keyword("λ".to_string()),
                    TokenKind::Identifier("lambdaish".to_string())]);
}

#[test]
fn operator_runs_are_greedy() {
    assert_eq!(kinds("1<=2"),
               vec![TokenKind::Number(1.0),
                    TokenKind::Operator("<=".to_string()),
                    TokenKind::Number(2.0)]);
    // Maximal munch: adjacent operator characters fuse into one token.
    assert_eq!(kinds("a ==! b"),
               vec![TokenKind::Identifier("a".to_string()),
                    TokenKind::Operator("==!".to_string()),
                    TokenKind::Identifier("b".to_string())]);
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(kinds("1 # the rest; of this line\n2"),
               vec![TokenKind::Number(1.0), TokenKind::Number(2.0)]);
    // A comment on the last line ends at the input.
    assert_eq!(kinds("1 # trailing"), vec![TokenKind::Number(1.0)]);
}

#[test]
fn tokens_carry_their_source_line() {
    let tokens = tokens("a\n b\n\n  c");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn unrecognized_characters_fail_with_line_and_column() {
    let err = Lexer::new("x = 1;\n  @").tokenize_all()
                                       .expect_err("'@' is not in the language");
    assert_eq!(err.to_string(),
               "Error on line 2, column 3: can't handle character '@'.");
}
