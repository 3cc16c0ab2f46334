use num_bigint::BigUint;

use crate::error::InterpretError;

/// One of the three recognized bracket pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` … `)`
    Paren,
    /// `[` … `]`
    Square,
    /// `{` … `}`
    Curly,
}

impl Bracket {
    /// Returns the bracket whose opening character is `c`.
    pub fn opening(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Paren),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    /// Returns the bracket whose closing character is `c`.
    pub fn closing(c: char) -> Option<Bracket> {
        match c {
            ')' => Some(Bracket::Paren),
            ']' => Some(Bracket::Square),
            '}' => Some(Bracket::Curly),
            _ => None,
        }
    }
}

/// The payload of a formula token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Element symbol with its multiplier (1 when no digits follow).
    Atom { symbol: &'a str, count: BigUint },
    /// Opening bracket of a group.
    Open,
    /// Closing bracket of a group with its multiplier (1 when no digits follow).
    Close { count: BigUint },
}

/// A token together with where it was found in the formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first character of the token.
    pub offset: usize,
    /// The exact source text consumed, digits included.
    pub text: &'a str,
}

/// A lexer for chemical formulas.
///
/// ## Overview
///
/// The lexer scans the formula left to right and yields one [`Token`] per
/// step:
///
/// - **Atoms**: an uppercase letter, an optional lowercase letter, then an
///   optional decimal count (`H`, `O2`, `Mg`, `Cl12`)
/// - **Group openers**: `(`, `[`, `{`
/// - **Group closers**: `)`, `]`, `}` with an optional decimal count
///
/// Counts are unbounded. Anything else (digits with no preceding atom,
/// lowercase letters on their own, whitespace, punctuation) yields
/// [`InterpretError::BadCharacter`] and ends the stream.
///
/// ## Examples
///
/// ```
/// use molecule_parser::BigUint;
/// use molecule_parser::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("O2").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Atom { symbol: "O", count: BigUint::from(2u32) }]);
/// ```
pub struct Lexer<'a> {
    /// The formula being lexed.
    input: &'a str,
    /// Current byte position in the input.
    position: usize,
    /// Set once an error has been yielded.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given formula.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            failed: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, InterpretError> {
        let input = self.input;
        let start = self.position;
        let Some(c) = input[start..].chars().next() else {
            return Ok(None);
        };

        let kind = if c.is_ascii_uppercase() {
            self.position += 1;
            if self.peek().is_some_and(|n| n.is_ascii_lowercase()) {
                self.position += 1;
            }
            let symbol = &input[start..self.position];
            let count = self.count()?;
            TokenKind::Atom { symbol, count }
        } else if Bracket::opening(c).is_some() {
            self.position += 1;
            TokenKind::Open
        } else if Bracket::closing(c).is_some() {
            self.position += 1;
            let count = self.count()?;
            TokenKind::Close { count }
        } else {
            return Err(InterpretError::BadCharacter {
                character: c,
                position: start,
            });
        };

        Ok(Some(Token {
            kind,
            offset: start,
            text: &input[start..self.position],
        }))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Consumes an optional run of ASCII digits, defaulting to 1.
    fn count(&mut self) -> Result<BigUint, InterpretError> {
        let start = self.position;
        while self.peek().is_some_and(|n| n.is_ascii_digit()) {
            self.position += 1;
        }
        if start == self.position {
            return Ok(BigUint::from(1u32));
        }
        BigUint::parse_bytes(self.input[start..self.position].as_bytes(), 10).ok_or(
            InterpretError::BadCharacter {
                character: self.input[start..].chars().next().unwrap_or('0'),
                position: start,
            },
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, InterpretError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
