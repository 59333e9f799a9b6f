//! Address extraction.

use vcf2csv_rfc::rfc::vcard::parse::parse_address;
use vcf2csv_rfc::rfc::vcard::{FieldOccurrence, names};

use super::working::WorkingRecord;
use crate::error::{NormalizeError, NormalizeResult};

/// ## Summary
/// Formats every `ADR` occurrence as `"<street>\n<locality>, <region> <postal>"`
/// and consumes the field. Country is not part of the output.
///
/// ## Errors
/// Returns [`NormalizeError::UnsupportedAddressShape`] for an address with a
/// post office box or extended component; those have no column to go to.
pub fn extract_addresses(record: &mut WorkingRecord) -> NormalizeResult<Vec<String>> {
    record
        .take(names::ADR)
        .into_iter()
        .map(format_address)
        .collect()
}

fn format_address(occurrence: FieldOccurrence) -> NormalizeResult<String> {
    let address = parse_address(&occurrence.value);

    if address.has_box_or_extended() {
        return Err(NormalizeError::UnsupportedAddressShape { occurrence });
    }

    Ok(format!(
        "{}\n{}, {} {}",
        address.street, address.locality, address.region, address.postal_code
    ))
}
