//! A cursor over a string with bounded lookahead and backtracking.

const NEWLINE: char = '\n';

/// A location inside the source of a [Scanner]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// The current byte offset
    ///
    /// At all times, this is guaranteed to point to a character boundary
    /// in the scanned source.
    offset: usize,

    line: usize,
    column: usize,
}

impl Position {
    const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The (1-based) line number
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The (1-based) column, counted in characters
    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();

        if c == NEWLINE {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    position: Position,

    /// The snapshot taken by the last call to [store_position](Scanner::store_position)
    stored: Position,
}

impl<'a> Scanner<'a> {
    #[inline]
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::START,
            stored: Position::START,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position.offset..]
    }

    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position.offset == self.source.len()
    }

    /// Return up to `n` characters without consuming them
    ///
    /// Returns `None` if the scanner is already at the end of its source.
    #[must_use]
    pub fn peek(&self, n: usize) -> Option<&'a str> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }

        let end = remaining
            .char_indices()
            .nth(n)
            .map_or(remaining.len(), |(index, _)| index);

        Some(&remaining[..end])
    }

    /// Consume up to `n` characters
    ///
    /// Returns `None` if the scanner is already at the end of its source.
    pub fn read(&mut self, n: usize) -> Option<&'a str> {
        let text = self.peek(n)?;

        for c in text.chars() {
            self.position.advance(c);
        }

        Some(text)
    }

    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn read_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.position.advance(c);
        Some(c)
    }

    /// Remember the current position so it can later be returned to
    /// with [restore_position](Scanner::restore_position).
    ///
    /// Only the most recent snapshot is kept.
    pub fn store_position(&mut self) {
        self.stored = self.position;
    }

    pub fn restore_position(&mut self) {
        self.position = self.stored;
    }
}
