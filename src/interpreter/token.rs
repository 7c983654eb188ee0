/// The fixed keyword set of the language.
///
/// Identifiers are checked against this list after maximal-munch scanning;
/// membership reclassifies the token from identifier to keyword, with the
/// text left unchanged.
pub const KEYWORDS: &[&str] = &["if", "then", "else", "lambda", "λ", "true", "false"];

/// A half-open `[start, end)` byte interval into the original source.
///
/// Spans cover a token's full source extent (string quotes included), so the
/// spans of a token stream are non-overlapping, monotonically non-decreasing,
/// and slicing the source with them reconstructs everything the lexer did not
/// skip as whitespace or comments. Highlighters consume these directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the token's first character.
    pub start: usize,
    /// Byte offset one past the token's last character.
    pub end:   usize,
}

impl Span {
    /// Slices `source` to the text this span covers.
    ///
    /// # Example
    /// ```
    /// use mu_lang::interpreter::token::Span;
    ///
    /// let span = Span { start: 0, end: 5 };
    /// assert_eq!(span.text("hello world"), "hello");
    /// ```
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// The payload of a token: its kind together with the literal value.
///
/// Number literals carry the parsed `f64`, strings carry the unescaped text,
/// everything else carries the raw source text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal such as `3.14` or `42`.
    Number(f64),
    /// A string literal, quotes stripped, escape pairs kept verbatim.
    Str(String),
    /// A variable or function name such as `x` or `fib`.
    Identifier(String),
    /// A reserved word from [`KEYWORDS`].
    Keyword(String),
    /// A maximal run of operator characters, e.g. `+`, `<=`, `&&`.
    Operator(String),
    /// A single punctuation character from `,;(){}[]`.
    Punctuation(char),
    /// The end of the source text.
    EndOfInput,
}

impl TokenKind {
    /// Returns `true` when this is the given punctuation character.
    #[must_use]
    pub fn is_punc(&self, ch: char) -> bool {
        matches!(self, Self::Punctuation(c) if *c == ch)
    }

    /// Returns `true` when this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Self::Keyword(w) if w == word)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Keyword(word) => write!(f, "keyword '{word}'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Punctuation(ch) => write!(f, "punctuation '{ch}'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A single lexical token.
///
/// Tokens are created by the lexer and are immutable afterwards; ownership
/// passes to the parser and from there into AST leaves. The `span` records
/// where the token came from, the `line` is carried along for located errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is, together with its literal payload.
    pub kind: TokenKind,
    /// The token's source extent.
    pub span: Span,
    /// 1-based source line of the token's first character.
    pub line: usize,
}
