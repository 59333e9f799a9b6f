//! vCard parsing.
//!
//! ## Features
//!
//! - Accepts vCard 2.1, 3.0 and 4.0
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL)
//! - Treats vCard 2.1 bare parameters as TYPE values
//! - RFC 6868 caret encoding for parameters
//! - Streaming decoder that separates end-of-stream from errors

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, LogicalLine, logical_lines};
pub use parser::{Decoder, parse};
pub use values::{parse_address, parse_structured_name, split_structured, unescape_text};
