use crate::error::ParseError;

/// A character cursor over the raw source text.
///
/// The cursor owns the read position and nothing else: single-character
/// lookahead, consumption with line/column tracking, and a located error
/// constructor. It treats the input as a flat character sequence with no
/// buffering beyond the current index.
#[derive(Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    pos:    usize,
    line:   usize,
    col:    usize,
}

impl<'a> SourceCursor<'a> {
    /// Creates a cursor at the start of `source`, on line 1, column 1.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               pos: 0,
               line: 1,
               col: 1, }
    }

    /// Returns the current character without consuming it, or `None` at the
    /// end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consumes and returns the current character.
    ///
    /// A newline increments the line counter and resets the column; any other
    /// character advances the column.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The byte offset of the next unread character.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The 1-based line of the next unread character.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column of the next unread character.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Builds a lexical error carrying the current line and column.
    ///
    /// # Example
    /// ```
    /// use mu_lang::interpreter::cursor::SourceCursor;
    ///
    /// let cursor = SourceCursor::new("abc");
    /// let err = cursor.fail("can't handle character '§'");
    /// assert_eq!(err.to_string(),
    ///            "Error on line 1, column 1: can't handle character '§'.");
    /// ```
    #[must_use]
    pub fn fail(&self, message: impl Into<String>) -> ParseError {
        ParseError::Lexical { message: message.into(),
                              line:    self.line,
                              col:     self.col, }
    }
}
