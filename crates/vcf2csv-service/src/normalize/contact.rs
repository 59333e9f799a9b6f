//! Email and phone extraction.

use vcf2csv_rfc::rfc::vcard::core::{TYPE, types};
use vcf2csv_rfc::rfc::vcard::{FieldOccurrence, names};

use super::format::{format_named, format_phone, verbatim};
use super::working::WorkingRecord;

/// TYPE values that say nothing useful about an email or phone.
const UNINFORMATIVE_TYPES: [&str; 3] = [types::VOICE, types::INTERNET, types::PREF];

/// ## Summary
/// Formats every `EMAIL` occurrence and consumes the field.
pub fn extract_emails(record: &mut WorkingRecord) -> Vec<String> {
    record
        .take(names::EMAIL)
        .iter()
        .map(|occurrence| format_contact(occurrence, verbatim))
        .collect()
}

/// ## Summary
/// Formats every `TEL` occurrence and consumes the field.
pub fn extract_phones(record: &mut WorkingRecord) -> Vec<String> {
    record
        .take(names::TEL)
        .iter()
        .map(|occurrence| format_contact(occurrence, format_phone))
        .collect()
}

/// Applies the `"Value - Name"` rule, then appends informative TYPE values
/// as `" (home)"`.
fn format_contact(occurrence: &FieldOccurrence, transform: fn(&str) -> String) -> String {
    let mut formatted = format_named(&occurrence.value, transform);

    for kind in occurrence.param_values(TYPE) {
        let kind = kind.trim();
        if kind.is_empty()
            || UNINFORMATIVE_TYPES
                .iter()
                .any(|ignored| ignored.eq_ignore_ascii_case(kind))
        {
            continue;
        }
        formatted.push_str(" (");
        formatted.push_str(&kind.to_lowercase());
        formatted.push(')');
    }

    formatted
}
