//! Content line scanning: unfolding, then group, name, parameters and value.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// One unfolded line and the physical line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based physical line number.
    pub number: usize,
    pub text: String,
}

/// ## Summary
/// Unfolds `input` into logical lines and drops blank ones.
///
/// A physical line starting with a space or tab continues the previous line.
/// The line break and that one whitespace character are removed, so folded
/// base64 `PHOTO` data stays intact. CRLF and bare LF are both accepted.
#[must_use]
pub fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (index, raw) in input.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(continuation) = raw.strip_prefix([' ', '\t'])
            && let Some(last) = lines.last_mut()
        {
            last.text.push_str(continuation);
            continue;
        }

        lines.push(LogicalLine {
            number: index + 1,
            text: raw.to_string(),
        });
    }

    lines.retain(|line| !line.text.trim().is_empty());
    lines
}

/// A content line split into its parts, before it is stored in a record.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Group prefix, `item1` in `item1.TEL`.
    pub group: Option<String>,
    /// Property name, uppercased.
    pub name: String,
    pub params: Vec<VCardParameter>,
    /// Raw value, still escaped.
    pub value: String,
}

impl ContentLine {
    /// ## Summary
    /// Parses `[group.]name[;param[=value[,value]*]]*:value`.
    ///
    /// A parameter without `=` (`TEL;HOME:...`, vCard 2.1) becomes a TYPE value.
    /// Quoted parameter values may contain `:`, `;` and `,`.
    ///
    /// ## Errors
    /// - [`ParseErrorKind::InvalidPropertyName`] when the `:` is missing or the
    ///   name has characters other than letters, digits and `-`
    /// - [`ParseErrorKind::InvalidParameter`] for an empty parameter
    pub fn parse(text: &str, number: usize) -> ParseResult<Self> {
        let colon = find_unquoted(text, ':').ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                number,
                "missing colon separator",
            )
        })?;
        let (head, value) = (&text[..colon], &text[colon + 1..]);

        let mut segments = split_unquoted(head, ';').into_iter();
        let target = segments.next().unwrap_or_default();
        let (group, name) = split_group(target);

        if !is_identifier(name) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                number,
                format!("invalid property name: {name}"),
            ));
        }

        let params = segments
            .map(|segment| parse_parameter(segment, number))
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Self {
            group: group.map(String::from),
            name: name.to_ascii_uppercase(),
            params,
            value: value.to_string(),
        })
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Splits `item1.TEL` into its group and name. A prefix that is not an
/// identifier is left in the name, which then fails validation.
fn split_group(target: &str) -> (Option<&str>, &str) {
    match target.split_once('.') {
        Some((group, name)) if is_identifier(group) => (Some(group), name),
        _ => (None, target),
    }
}

fn parse_parameter(segment: &str, number: usize) -> ParseResult<VCardParameter> {
    let param = match segment.split_once('=') {
        Some((name, values)) => VCardParameter::multi(
            name,
            split_unquoted(values, ',')
                .into_iter()
                .map(decode_param_value)
                .collect(),
        ),
        None => VCardParameter::type_param(decode_param_value(segment)),
    };

    if param.name.is_empty() || param.values.iter().all(String::is_empty) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            number,
            format!("empty parameter: {segment:?}"),
        ));
    }

    Ok(param)
}

/// Drops quotes and decodes RFC 6868 caret escapes (`^n`, `^'`, `^^`).
/// Any other caret is kept.
fn decode_param_value(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().filter(|&c| c != '"');

    while let Some(c) = chars.next() {
        if c != '^' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => decoded.push('\n'),
            Some('\'') => decoded.push('"'),
            Some('^') => decoded.push('^'),
            Some(other) => {
                decoded.push('^');
                decoded.push(other);
            }
            None => decoded.push('^'),
        }
    }

    decoded
}

fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut quoted = false;
    s.char_indices().find_map(|(i, c)| {
        if c == '"' {
            quoted = !quoted;
        }
        (c == target && !quoted).then_some(i)
    })
}

fn split_unquoted(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;

    while let Some(pos) = find_unquoted(rest, separator) {
        parts.push(&rest[..pos]);
        rest = &rest[pos + separator.len_utf8()..];
    }
    parts.push(rest);

    parts
}
