//! Error taxonomy for formula validation and interpretation.

/// Raised by [`validate_brackets`](crate::validator::validate_brackets).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Brackets are unbalanced, wrongly nested, or of mismatched type.
    #[error("delimiter mismatch")]
    DelimiterMismatch,
}

/// Raised by the lexer and [`interpret`](crate::interpreter::interpret).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    /// No token matches at byte offset `position`.
    #[error("bad character '{character}' at byte offset {position}")]
    BadCharacter { character: char, position: usize },

    /// A closing bracket with no open group. Only reachable without validation.
    #[error("unexpected closing bracket at byte offset {position}")]
    UnexpectedClose { position: usize },

    /// Input ended with groups still open. Only reachable without validation.
    #[error("unclosed group at end of formula")]
    UnclosedGroup,
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DelimiterMismatch,
    BadCharacter,
}

/// The single error surfaced by [`parse_formula`](crate::parse_formula).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid formula: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid formula: {0}")]
    Interpret(#[from] InterpretError),
}

impl ParseError {
    /// Which kind of failure occurred.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Interpret(InterpretError::BadCharacter { .. }) => ErrorKind::BadCharacter,
            ParseError::Validation(ValidationError::DelimiterMismatch)
            | ParseError::Interpret(
                InterpretError::UnexpectedClose { .. } | InterpretError::UnclosedGroup,
            ) => ErrorKind::DelimiterMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_character_message_quotes_the_character() {
        let err = InterpretError::BadCharacter {
            character: '-',
            position: 0,
        };
        assert_eq!(err.to_string(), "bad character '-' at byte offset 0");
    }

    #[test]
    fn test_bad_character_message_keeps_quote_literal() {
        let err = InterpretError::BadCharacter {
            character: '\'',
            position: 0,
        };
        assert!(err.to_string().starts_with("bad character '''"));
    }

    #[test]
    fn test_parse_error_prefixes_message() {
        let err = ParseError::from(ValidationError::DelimiterMismatch);
        assert_eq!(err.to_string(), "invalid formula: delimiter mismatch");
        assert_eq!(err.kind(), ErrorKind::DelimiterMismatch);
    }

    #[test]
    fn test_structural_interpret_errors_classify_as_mismatch() {
        let err = ParseError::from(InterpretError::UnclosedGroup);
        assert_eq!(err.kind(), ErrorKind::DelimiterMismatch);
        let err = ParseError::from(InterpretError::UnexpectedClose { position: 3 });
        assert_eq!(err.kind(), ErrorKind::DelimiterMismatch);
    }
}
