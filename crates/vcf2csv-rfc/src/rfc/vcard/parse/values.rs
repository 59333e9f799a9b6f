//! vCard structured value helpers.

use crate::rfc::vcard::core::{Address, StructuredName};

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped) if matches!(escaped, ',' | ';' | '\\') => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' && !prev_backslash {
            prev_backslash = true;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Returns the unescaped component at `index`, empty when missing.
fn component(parts: &[&str], index: usize) -> String {
    parts.get(index).map(|s| unescape_text(s)).unwrap_or_default()
}

/// Parses a structured name (N property).
///
/// N has 5 components: family;given;additional;prefixes;suffixes.
/// Missing trailing components are empty.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);

    StructuredName {
        family: component(&parts, 0),
        given: component(&parts, 1),
        additional: component(&parts, 2),
        prefixes: component(&parts, 3),
        suffixes: component(&parts, 4),
    }
}

/// Parses an address (ADR property).
///
/// ADR has 7 components: PO Box;Extended;Street;Locality;Region;PostalCode;Country.
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);

    Address {
        po_box: component(&parts, 0),
        extended: component(&parts, 1),
        street: component(&parts, 2),
        locality: component(&parts, 3),
        region: component(&parts, 4),
        postal_code: component(&parts, 5),
        country: component(&parts, 6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape_text(r"a\,b\;c\\d\ne"), "a,b;c\\d\ne");
        assert_eq!(unescape_text(r"trailing\"), "trailing\\");
        assert_eq!(unescape_text(r"\x"), "\\x");
    }

    #[test]
    fn split_respects_escapes() {
        assert_eq!(split_structured(r"a;b\;c;d"), vec!["a", r"b\;c", "d"]);
        assert_eq!(split_structured(r"a\\;b"), vec![r"a\\", "b"]);
        assert_eq!(split_structured(""), vec![""]);
    }

    #[test]
    fn structured_name_components() {
        let name = parse_structured_name("Smith;Jane & Bob;Q;Dr.;Jr.");
        assert_eq!(name.family, "Smith");
        assert_eq!(name.given, "Jane & Bob");
        assert_eq!(name.additional, "Q");
        assert_eq!(name.prefixes, "Dr.");
        assert_eq!(name.suffixes, "Jr.");
    }

    #[test]
    fn structured_name_short() {
        let name = parse_structured_name("Smith");
        assert_eq!(name.family, "Smith");
        assert!(name.given.is_empty());
    }

    #[test]
    fn address_components() {
        let addr = parse_address(r";;123 Main St\nApt 4;Springfield;IL;62701;USA");
        assert!(addr.po_box.is_empty());
        assert!(addr.extended.is_empty());
        assert_eq!(addr.street, "123 Main St\nApt 4");
        assert_eq!(addr.locality, "Springfield");
        assert_eq!(addr.region, "IL");
        assert_eq!(addr.postal_code, "62701");
        assert_eq!(addr.country, "USA");
    }

    #[test]
    fn address_with_po_box() {
        let addr = parse_address("PO Box 12;;;Springfield;IL;62701;");
        assert_eq!(addr.po_box, "PO Box 12");
    }
}
