//! Streaming vCard decoder.

use std::io::Read;

use super::error::{ParseError, ParseResult};
use super::lexer::{ContentLine, LogicalLine, logical_lines};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{FieldOccurrence, RawRecord, names};

/// Versions accepted on the VERSION line.
const SUPPORTED_VERSIONS: [&str; 3] = ["2.1", "3.0", "4.0"];

/// Decodes vCard records one at a time.
///
/// [`Decoder::next_record`] returns `Ok(None)` at end of input, distinct from a
/// decode error. After an error the decoder is exhausted.
#[derive(Debug)]
pub struct Decoder {
    lines: Vec<LogicalLine>,
    pos: usize,
    failed: bool,
}

impl Decoder {
    /// Creates a decoder over a complete vCard document.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let lines = logical_lines(input);
        tracing::trace!(count = lines.len(), "Unfolded lines");

        Self {
            lines,
            pos: 0,
            failed: false,
        }
    }

    /// Reads a whole byte stream and creates a decoder over it.
    ///
    /// ## Errors
    /// Returns an I/O error if reading fails, or an encoding error if the
    /// input is not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> RfcResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let input = String::from_utf8(bytes)
            .map_err(|e| ParseError::encoding(format!("input is not valid UTF-8: {e}")))?;

        Ok(Self::new(&input))
    }

    /// Decodes the next record.
    ///
    /// Content before `BEGIN:VCARD` is skipped.
    ///
    /// ## Errors
    /// Returns an error if a record is not closed, is nested, has a malformed
    /// content line, or declares an unsupported version.
    pub fn next_record(&mut self) -> ParseResult<Option<RawRecord>> {
        if self.failed {
            return Ok(None);
        }

        let result = self.advance();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn advance(&mut self) -> ParseResult<Option<RawRecord>> {
        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            self.pos += 1;

            if is_delimiter(&line.text, names::BEGIN) {
                let begin_line = line.number;
                return self.parse_record(begin_line).map(Some);
            }
        }

        Ok(None)
    }

    fn parse_record(&mut self, begin_line: usize) -> ParseResult<RawRecord> {
        let mut record = RawRecord::new();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            let line_num = line.number;
            self.pos += 1;

            if is_delimiter(&line.text, names::END) {
                tracing::trace!(fields = record.len(), line = line_num, "Decoded record");
                return Ok(record);
            }

            if is_delimiter(&line.text, names::BEGIN) {
                return Err(ParseError::unexpected(
                    line_num,
                    "END:VCARD",
                    "nested BEGIN:VCARD",
                ));
            }

            let content_line = ContentLine::parse(&line.text, line_num)?;

            if content_line.name == names::VERSION
                && !SUPPORTED_VERSIONS.contains(&content_line.value.trim())
            {
                return Err(ParseError::unsupported_version(
                    line_num,
                    &content_line.value,
                ));
            }

            record.push(
                content_line.name,
                FieldOccurrence::from_parts(
                    content_line.group,
                    content_line.params,
                    content_line.value,
                ),
            );
        }

        Err(ParseError::unclosed(begin_line))
    }
}

impl Iterator for Decoder {
    type Item = ParseResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Returns whether `line` is `BEGIN:VCARD` / `END:VCARD` for the given keyword.
fn is_delimiter(line: &str, keyword: &str) -> bool {
    line.split_once(':').is_some_and(|(name, value)| {
        name.trim().eq_ignore_ascii_case(keyword) && value.trim().eq_ignore_ascii_case(names::VCARD)
    })
}

/// Parses a complete vCard document into records.
///
/// ## Errors
/// Returns the first decode error encountered.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<RawRecord>> {
    tracing::debug!("Parsing vCard document");

    let records = Decoder::new(input).collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(count = records.len(), "Parsed vCards");

    Ok(records)
}
