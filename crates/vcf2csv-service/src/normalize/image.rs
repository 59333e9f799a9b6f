//! Photo extraction.

use vcf2csv_rfc::rfc::vcard::names;

use super::working::WorkingRecord;

/// ## Summary
/// Returns the first `PHOTO` value verbatim (URI or inline data) and consumes
/// the field. Empty when the record has no photo.
pub fn extract_image(record: &mut WorkingRecord) -> String {
    record
        .take(names::PHOTO)
        .into_iter()
        .next()
        .map(|occurrence| occurrence.value)
        .unwrap_or_default()
}
