use crate::{
    error::ParseError,
    interpreter::{
        cursor::SourceCursor,
        token::{KEYWORDS, Span, Token, TokenKind},
    },
};

/// Result type used by the lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The whitespace class: space, newline, tab, and the non-breaking-space
/// code point (editors paste those into contenteditable surfaces).
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t' | '\u{00A0}')
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Characters that may start an identifier.
fn is_id_start(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == 'λ' || ch == '_'
}

/// Characters that may continue an identifier.
fn is_id(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == 'λ' || ch == '_'
}

fn is_op_char(ch: char) -> bool {
    "+-*/%=&|<>!".contains(ch)
}

fn is_punc(ch: char) -> bool {
    ",;(){}[]".contains(ch)
}

/// The tokenizer: turns a character stream into a lazy token stream.
///
/// Tokens come out position-tagged, each carrying the half-open byte span of
/// its source extent, so a syntax highlighter subscribes to the scan simply
/// by iterating the stream ([`Lexer::next`] or [`Lexer::tokenize_all`]);
/// there is no callback registry to re-enter. Spans appear in strict source
/// order, non-overlapping and monotonically non-decreasing.
///
/// The lexer keeps a single-slot lookahead: [`Lexer::peek`] reads one token
/// ahead and caches it until the next call to [`Lexer::next`] consumes it.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor:    SourceCursor<'a>,
    lookahead: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { cursor:    SourceCursor::new(source),
               lookahead: None, }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns a located `ParseError::Lexical` on an unrecognized character.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.read_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    /// Consumes and returns the next token.
    ///
    /// At the end of input this keeps returning the end-of-input token.
    ///
    /// # Errors
    /// Returns a located `ParseError::Lexical` on an unrecognized character.
    pub fn next(&mut self) -> ParseResult<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    /// Returns `true` once only the end-of-input token remains.
    ///
    /// # Errors
    /// Propagates lexical errors from the lookahead read.
    pub fn at_end(&mut self) -> ParseResult<bool> {
        Ok(self.peek()?.kind == TokenKind::EndOfInput)
    }

    /// Drains the stream and returns every token in source order, the
    /// end-of-input token excluded.
    ///
    /// This is the convenience entry point for highlighting consumers, which
    /// only care about the `(kind, span)` pairs.
    ///
    /// # Errors
    /// Returns the first lexical error encountered, aborting the scan there.
    pub fn tokenize_all(&mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next()?;
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Scans one token from the cursor.
    ///
    /// Skips whitespace and `#` comments first, then dispatches on the first
    /// significant character, in this priority order: end of input, string
    /// literal, number, identifier/keyword, operator run, punctuation.
    /// Anything else is a located lexical error.
    fn read_token(&mut self) -> ParseResult<Token> {
        loop {
            self.skip_while(is_whitespace);
            if let Some('#') = self.cursor.peek() {
                self.skip_comment();
                continue;
            }
            break;
        }

        let start = self.cursor.pos();
        let line = self.cursor.line();

        let kind = match self.cursor.peek() {
            None => TokenKind::EndOfInput,
            Some('"') => self.read_string(),
            Some(ch) if is_digit(ch) => self.read_number()?,
            Some(ch) if is_id_start(ch) => self.read_identifier(),
            Some(ch) if is_op_char(ch) => TokenKind::Operator(self.take_while(is_op_char)),
            Some(ch) if is_punc(ch) => {
                self.cursor.next();
                TokenKind::Punctuation(ch)
            },
            Some(ch) => return Err(self.cursor.fail(format!("can't handle character '{ch}'"))),
        };

        Ok(Token { kind,
                   span: Span { start,
                                end: self.cursor.pos(), },
                   line })
    }

    /// Consumes characters while `test` holds and returns them.
    fn take_while(&mut self, mut test: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !test(ch) {
                break;
            }
            self.cursor.next();
            text.push(ch);
        }
        text
    }

    /// Consumes characters while `test` holds, discarding them.
    fn skip_while(&mut self, test: impl Fn(char) -> bool) {
        while let Some(ch) = self.cursor.peek() {
            if !test(ch) {
                break;
            }
            self.cursor.next();
        }
    }

    /// Skips a `#` comment through (and including) the end of the line.
    fn skip_comment(&mut self) {
        self.skip_while(|ch| ch != '\n');
        self.cursor.next();
    }

    /// Scans a numeric literal: digits with at most one `.`.
    ///
    /// A second `.` terminates the number without consuming it: the scan
    /// just stops, it never errors here. The stray dot then fails as an
    /// unrecognized character if nothing else claims it.
    fn read_number(&mut self) -> ParseResult<TokenKind> {
        let mut has_dot = false;
        let text = self.take_while(|ch| {
                           if ch == '.' {
                               if has_dot {
                                   return false;
                               }
                               has_dot = true;
                               return true;
                           }
                           is_digit(ch)
                       });
        match text.parse::<f64>() {
            Ok(value) => Ok(TokenKind::Number(value)),
            Err(_) => Err(self.cursor.fail(format!("invalid number literal '{text}'"))),
        }
    }

    /// Scans a string literal.
    ///
    /// The opening and closing quotes are consumed but excluded from the
    /// value. A `\` escapes exactly the next character: both are kept in the
    /// value verbatim (no named-escape translation), and the closing quote is
    /// only recognized when no escape is pending. An unterminated string ends
    /// silently at end of input.
    fn read_string(&mut self) -> TokenKind {
        self.cursor.next();
        let mut escaped = false;
        let mut value = String::new();
        while let Some(ch) = self.cursor.peek() {
            if escaped {
                escaped = false;
                self.cursor.next();
                value.push(ch);
            } else if ch == '\\' {
                escaped = true;
                self.cursor.next();
                value.push(ch);
            } else if ch == '"' {
                self.cursor.next();
                break;
            } else {
                self.cursor.next();
                value.push(ch);
            }
        }
        TokenKind::Str(value)
    }

    /// Scans an identifier and reclassifies it as a keyword when the
    /// maximal-munch result is in the fixed keyword set.
    fn read_identifier(&mut self) -> TokenKind {
        let name = self.take_while(is_id);
        if KEYWORDS.contains(&name.as_str()) {
            TokenKind::Keyword(name)
        } else {
            TokenKind::Identifier(name)
        }
    }
}
