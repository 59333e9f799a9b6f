//! Decode errors.

use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

/// A decode failure at a physical input line.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line; 0 when the input as a whole was rejected.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// `expected` was required at `line` but `found` was there.
    #[must_use]
    pub fn unexpected(line: usize, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            line,
            format!("expected {expected}, found {found}"),
        )
    }

    /// The record opened at `begin_line` has no `END:VCARD`.
    #[must_use]
    pub fn unclosed(begin_line: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            begin_line,
            "vCard not closed with END:VCARD",
        )
    }

    #[must_use]
    pub fn unsupported_version(line: usize, version: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedVersion,
            line,
            format!("vCard version {version:?} is not 2.1, 3.0 or 4.0"),
        )
    }

    /// The input bytes are not UTF-8.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::EncodingError, 0, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: ", self.line)?;
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended inside a record.
    UnexpectedEof,
    /// A delimiter where it cannot appear, such as a nested `BEGIN:VCARD`.
    UnexpectedToken,
    /// Missing `:` or a name outside `A-Z a-z 0-9 -`.
    InvalidPropertyName,
    /// Empty parameter name or value.
    InvalidParameter,
    UnsupportedVersion,
    /// Input is not UTF-8.
    EncodingError,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedEof => "unexpected end of input",
            Self::UnexpectedToken => "unexpected token",
            Self::InvalidPropertyName => "invalid property name",
            Self::InvalidParameter => "invalid parameter",
            Self::UnsupportedVersion => "unsupported version",
            Self::EncodingError => "encoding error",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
