//! vCard decoding (RFC 6350, with vCard 2.1 and 3.0 leniency).
//!
//! ## Usage
//!
//! ```rust
//! use vcf2csv_rfc::rfc::vcard::{Decoder, names};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! N:Doe;John;;;\r\n\
//! item1.EMAIL;TYPE=INTERNET,HOME:john@example.com\r\n\
//! item1.X-ABLABEL:_$!<Home>!$_\r\n\
//! END:VCARD\r\n";
//!
//! let mut decoder = Decoder::new(input);
//! let record = decoder.next_record().unwrap().unwrap();
//! assert_eq!(record.get(names::EMAIL)[0].group, "item1");
//! assert!(decoder.next_record().unwrap().is_none());
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Record types (`RawRecord`, `FieldOccurrence`, structured values)
//! - [`parse`] - Decoder, lexer and value helpers

pub mod core;
pub mod parse;

pub use self::core::{Address, FieldOccurrence, RawRecord, StructuredName, VCardParameter, names};
pub use parse::{Decoder, ParseError, ParseErrorKind, ParseResult, parse};
