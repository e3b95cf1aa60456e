//! Character cursor with one character of lookahead.
//!
//! The extractor never indexes into the input directly. It asks the cursor
//! to `peek` at the next character, `advance` past it, or consume a whole
//! escape pair with `next_escaped`.

use std::iter::Peekable;
use std::str::Chars;

/// Escape introducer inside quoted values.
pub const BACKSLASH: char = '\\';

/// A forward-only cursor over the characters of a string.
pub struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first character of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consume the character following a backslash that was just taken
    /// and return what the pair decodes to.
    ///
    /// `n` decodes to a newline; anything else decodes to itself. A
    /// backslash at end of input decodes to a literal backslash.
    pub fn next_escaped(&mut self) -> char {
        match self.chars.next() {
            Some('n') => '\n',
            Some(c) => c,
            None => BACKSLASH,
        }
    }
}
