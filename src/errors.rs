//! General error types for the parser
use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser stages
pub type ParserResult<T> = Result<T, ParserError>;

/// Enumeration of the various different parser stages that can produce an error
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stage {
    /// The lexer stage of the parser
    Lexer,
    /// The parsing/tree construction stage of the parser
    Parser,
}

/// A global enumeration of error codes
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorDetails {
    /// The end of the input was reached unexpectedly
    EndOfInput,
    /// A specific character was required but something else was found
    UnexpectedCharacter {
        /// The character the grammar called for
        expected: char,
        /// The character actually at the cursor, [None] at end of input
        actual: Option<char>,
    },
    /// A period within a number wasn't followed by any fractional digits,
    /// or a number had no integer digits at all
    MalformedNumber,
    /// The input ended before the closing quote of a string
    UnterminatedString,
    /// An unrecognised escape sequence was found within a string
    InvalidEscapeSequence(String),
    /// A malformed \uXXXX escape sequence was found within a string
    InvalidUnicodeEscapeSequence(String),
    /// The document root was neither an object nor an array
    InvalidRootValue,
    /// Non-blank characters were found after the root value
    TrailingContent,
    /// The document nesting exceeded the maximum supported depth
    MaxDepthExceeded(usize),
}

impl Display for ParserErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "end of input reached"),
            Self::UnexpectedCharacter { expected, actual } => match actual {
                Some(c) => write!(f, "expecting '{}', got '{}'", expected, c),
                None => write!(f, "expecting '{}', got end of input", expected),
            },
            Self::MalformedNumber => write!(f, "unexpected symbol '.'"),
            Self::UnterminatedString => write!(f, "unterminated string in input"),
            Self::InvalidEscapeSequence(seq) => {
                write!(f, "invalid escape sequence: '{}'", seq)
            }
            Self::InvalidUnicodeEscapeSequence(seq) => {
                write!(f, "invalid unicode escape sequence: '{}'", seq)
            }
            Self::InvalidRootValue => {
                write!(f, "document root must be an object or an array")
            }
            Self::TrailingContent => {
                write!(f, "trailing content found after the root value")
            }
            Self::MaxDepthExceeded(limit) => {
                write!(f, "nesting depth limit of {} exceeded", limit)
            }
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// The originating stage for the error
    pub stage: Stage,
    /// The global error code for the error
    pub details: ParserErrorDetails,
    /// Optional parser coordinates
    pub coords: Option<Coords>,
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(f, "{:?} error: {} {}", self.stage, self.details, coords),
            None => write!(f, "{:?} error: {}", self.stage, self.details),
        }
    }
}

impl std::error::Error for ParserError {}

#[macro_export]
macro_rules! lexer_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Lexer,
            details: $details,
            coords: Some($coords),
        })
    };
    ($details: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Lexer,
            details: $details,
            coords: None,
        })
    };
}

#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Parser,
            details: $details,
            coords: Some($coords),
        })
    };
    ($details: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Parser,
            details: $details,
            coords: None,
        })
    };
}
