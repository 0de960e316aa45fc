//! Error types for EJSON parsing.

use thiserror::Error;

/// Errors that can occur while parsing EJSON text.
///
/// Every variant carries the byte offset into the input at which the problem
/// was detected; [`offset`](SyntaxError::offset) exposes it without matching
/// on the variant. The first error aborts the parse, so there is never a
/// partial result. Serialization is total over [`Value`](crate::Value) and
/// has no error type of its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A value was expected but the next character cannot start one.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// The input ended where a value was expected.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A string literal was still open when the input ended.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A backslash escape was cut off by the end of the input.
    #[error("unterminated escape sequence at offset {offset}")]
    UnterminatedEscape { offset: usize },

    /// An array was still open when the input ended.
    #[error("unterminated array starting at offset {offset}")]
    UnterminatedArray { offset: usize },

    /// An object was still open when the input ended.
    #[error("unterminated object starting at offset {offset}")]
    UnterminatedObject { offset: usize },

    /// A backslash was followed by a character that does not name an escape.
    #[error("invalid escape character '{found}' at offset {offset}")]
    InvalidEscape { found: char, offset: usize },

    /// A `\u` escape was not followed by four hex digits, or it encoded an
    /// unpaired UTF-16 surrogate.
    #[error("invalid unicode escape at offset {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// A numeric literal could not be read as a number or big integer.
    #[error("invalid number '{literal}' at offset {offset}")]
    InvalidNumber { literal: String, offset: usize },

    /// An object member did not start with a double-quoted key.
    #[error("expected string key at offset {offset}")]
    ExpectedKey { offset: usize },

    /// An object key was not followed by ':'.
    #[error("expected ':' after object key at offset {offset}")]
    ExpectedColon { offset: usize },

    /// Array elements must be separated by ','.
    #[error("expected ',' in array at offset {offset}, found '{found}'")]
    ExpectedArrayComma { found: char, offset: usize },

    /// Object members must be separated by ','.
    #[error("expected ',' in object at offset {offset}, found '{found}'")]
    ExpectedObjectComma { found: char, offset: usize },

    /// Input continued after the top-level value ended.
    #[error("unexpected trailing character '{found}' at offset {offset}")]
    TrailingCharacters { found: char, offset: usize },

    /// Containers were nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit} at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl SyntaxError {
    /// Byte offset into the input where the error was detected.
    ///
    /// For unterminated strings, arrays, and objects this is the offset of
    /// the opening delimiter rather than the end of the input.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::UnexpectedCharacter { offset, .. }
            | SyntaxError::UnexpectedEnd { offset }
            | SyntaxError::UnterminatedString { offset }
            | SyntaxError::UnterminatedEscape { offset }
            | SyntaxError::UnterminatedArray { offset }
            | SyntaxError::UnterminatedObject { offset }
            | SyntaxError::InvalidEscape { offset, .. }
            | SyntaxError::InvalidUnicodeEscape { offset }
            | SyntaxError::InvalidNumber { offset, .. }
            | SyntaxError::ExpectedKey { offset }
            | SyntaxError::ExpectedColon { offset }
            | SyntaxError::ExpectedArrayComma { offset, .. }
            | SyntaxError::ExpectedObjectComma { offset, .. }
            | SyntaxError::TrailingCharacters { offset, .. }
            | SyntaxError::TooDeep { offset, .. } => *offset,
        }
    }
}

/// Convenience alias used throughout ejson-core.
pub type Result<T> = std::result::Result<T, SyntaxError>;
