//! Splits a color string into a flat list of [Token]s.
//!
//! Tokenization never fails. Input that is not part of any color syntax simply
//! ends up as a sequence of [Token::Char], which the parser then rejects.

use std::borrow::Cow;

use crate::scanner::Scanner;

// characters are sort of unreadable and should
// be referenced via their name instead
const HASH: char = '#';
const PERCENT: char = '%';
const TAB: char = '\t';
const NEWLINE: char = '\n';
const FORM_FEED: char = '\u{000C}';
const CARRIAGE_RETURN: char = '\r';
const WHITESPACE: char = ' ';

/// The color functions that are recognized, including their opening parenthesis
const FUNCTIONS: [&str; 4] = ["rgb(", "rgba(", "hsl(", "hsla("];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Function,
    Hex,
    Number,
    Percentage,
    Char,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A function name including the opening parenthesis, like `rgb(`
    Function(String),

    /// A hex literal including the leading `#`, like `#fa0`
    Hex(String),

    Number(String),

    /// A number followed by a `%`, including the `%`
    Percentage(String),

    /// Any other character
    Char(char),
}

impl Token {
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Function(_) => TokenKind::Function,
            Self::Hex(_) => TokenKind::Hex,
            Self::Number(_) => TokenKind::Number,
            Self::Percentage(_) => TokenKind::Percentage,
            Self::Char(_) => TokenKind::Char,
        }
    }

    /// The source text that produced this token
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Function(text) | Self::Hex(text) | Self::Number(text) | Self::Percentage(text) => {
                Cow::Borrowed(text)
            },
            Self::Char(c) => Cow::Owned(c.to_string()),
        }
    }
}

/// Lowercase `text` and split it into tokens, discarding whitespace
#[must_use]
pub fn tokenize_color(text: &str) -> Vec<Token> {
    let source = text.to_lowercase();
    let mut tokenizer = Tokenizer::new(&source);

    let mut tokens = vec![];
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token);
    }

    tokens
}

#[derive(Clone, Copy, Debug)]
struct Tokenizer<'a> {
    source: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            scanner: Scanner::new(source),
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(function) = self.consume_function() {
                return Some(Token::Function(function.to_owned()));
            }

            if let Some(hex) = self.consume_hex() {
                return Some(Token::Hex(hex.to_owned()));
            }

            match self.scanner.peek_char()? {
                '0'..='9' | '.' | '-' => return Some(self.consume_numeric()),
                TAB | NEWLINE | FORM_FEED | CARRIAGE_RETURN | WHITESPACE => {
                    self.scanner.read_char();
                },
                _ => {
                    let position = self.scanner.position();
                    let c = self.scanner.read_char()?;

                    log::trace!(
                        "Emitting {c:?} at {}:{} as a char token",
                        position.line(),
                        position.column()
                    );
                    return Some(Token::Char(c));
                },
            }
        }
    }

    fn consume_function(&mut self) -> Option<&'a str> {
        let function = FUNCTIONS
            .into_iter()
            .find(|function| self.scanner.peek(function.len()) == Some(*function))?;

        self.scanner.read(function.len())
    }

    /// Consume `#` followed by either six or three hex digits
    ///
    /// If neither is possible, the scanner is left untouched.
    fn consume_hex(&mut self) -> Option<&'a str> {
        if self.scanner.peek_char() != Some(HASH) {
            return None;
        }

        self.scanner.store_position();

        for digits in [6, 3] {
            if let Some(text) = self.scanner.read(digits + 1) {
                let candidate = &text[HASH.len_utf8()..];

                if candidate.chars().count() == digits && candidate.chars().all(is_hex_digit) {
                    return Some(text);
                }
            }

            self.scanner.restore_position();
        }

        None
    }

    /// Consume a run of digits and dots, optionally followed by a `%`
    fn consume_numeric(&mut self) -> Token {
        let start = self.scanner.position().offset();

        // The first character has already been checked by the caller
        self.scanner.read_char();
        while matches!(self.scanner.peek_char(), Some('0'..='9' | '.')) {
            self.scanner.read_char();
        }

        let is_percentage = self.scanner.peek_char() == Some(PERCENT);
        if is_percentage {
            self.scanner.read_char();
        }

        let text = self.source[start..self.scanner.position().offset()].to_owned();
        if is_percentage {
            Token::Percentage(text)
        } else {
            Token::Number(text)
        }
    }
}

fn is_hex_digit(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f')
}
