use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// Errors surfaced by the decoding crate.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
