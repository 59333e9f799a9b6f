//! Name extraction from the mandatory `N` field.

use vcf2csv_rfc::rfc::vcard::names;
use vcf2csv_rfc::rfc::vcard::parse::parse_structured_name;

use super::working::WorkingRecord;
use crate::error::{NormalizeError, NormalizeResult};

/// Delimiter between two people sharing one card ("Jane & Bob").
const CO_RESIDENT_DELIMITER: char = '&';

/// Names taken from a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names {
    /// Given-name component, verbatim.
    pub given: String,
    /// Family-name component, verbatim.
    pub family: String,
    /// First person of a shared given name, or the whole given name.
    pub primary: String,
    /// Second person of a shared given name.
    pub co_resident: Option<String>,
}

impl Names {
    /// Builds names from the N components, deriving the primary/co-resident split.
    #[must_use]
    pub fn new(given: String, family: String) -> Self {
        let (primary, co_resident) = match given.split_once(CO_RESIDENT_DELIMITER) {
            Some((primary, other)) => {
                let other = other.trim();
                (primary.trim(), (!other.is_empty()).then(|| other.to_string()))
            }
            None => (given.trim(), None),
        };

        Self {
            primary: primary.to_string(),
            co_resident,
            given,
            family,
        }
    }
}

/// ## Summary
/// Extracts names from the single `N` occurrence and consumes `N` and `FN`.
///
/// ## Errors
/// Returns [`NormalizeError::MalformedRecord`] unless there is exactly one `N`.
pub fn extract_names(record: &mut WorkingRecord) -> NormalizeResult<Names> {
    let occurrences = record.take(names::N);
    record.take(names::FN);

    let [occurrence] = occurrences.as_slice() else {
        return Err(NormalizeError::MalformedRecord {
            field: names::N,
            count: occurrences.len(),
        });
    };

    let name = parse_structured_name(&occurrence.value);
    Ok(Names::new(name.given, name.family))
}
