use thiserror::Error;
use vcf2csv_rfc::rfc::vcard::FieldOccurrence;

/// Reasons a record cannot be normalized.
///
/// Every variant is fatal for its record only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Malformed record: expected exactly one {field} field, found {count}")]
    MalformedRecord { field: &'static str, count: usize },

    #[error("Unsupported address shape: {occurrence} has a post office box or extended address")]
    UnsupportedAddressShape { occurrence: FieldOccurrence },

    #[error("Unknown date field: {occurrence} is labelled {}", .label.as_deref().unwrap_or("nothing"))]
    UnknownDateField {
        label: Option<String>,
        occurrence: FieldOccurrence,
    },

    #[error("Duplicate value for {field}: {occurrence}")]
    DuplicateValue {
        field: &'static str,
        occurrence: FieldOccurrence,
    },
}

pub type NormalizeResult<T> = std::result::Result<T, NormalizeError>;
