//! Record normalization.
//!
//! [`normalize`] runs the extraction steps in a fixed order over one record.
//! Each step takes the fields it understands out of a [`WorkingRecord`]; the
//! first error aborts the record.

mod address;
mod contact;
mod dates;
mod format;
mod image;
mod label;
mod name;
mod working;


pub use address::extract_addresses;
pub use contact::{extract_emails, extract_phones};
pub use dates::{Dates, extract_dates};
pub use format::{NAME_SEPARATOR, format_date, format_named, format_phone, verbatim};
pub use image::extract_image;
pub use label::{LabelMap, labels, normalize_label, resolve_labels};
pub use name::{Names, extract_names};
pub use working::WorkingRecord;

use vcf2csv_rfc::rfc::vcard::RawRecord;

use crate::entry::Entry;
use crate::error::NormalizeResult;

/// A successfully normalized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub entry: Entry,
    /// Group labels resolved for the record.
    pub labels: LabelMap,
    /// Fields no step understood.
    pub remaining: RawRecord,
}

/// ## Summary
/// Normalizes one record into an [`Entry`].
///
/// Order: labels, names, image, addresses, dates, emails, phones.
///
/// ## Errors
/// Returns the first [`crate::NormalizeError`] raised by a step. No partial
/// entry is produced.
#[tracing::instrument(skip(record), fields(fields = record.len()))]
pub fn normalize(record: RawRecord) -> NormalizeResult<Normalized> {
    let mut record = WorkingRecord::new(record);

    let labels = resolve_labels(&mut record);
    let names = extract_names(&mut record)?;
    let image = extract_image(&mut record);
    let address = extract_addresses(&mut record)?;
    let dates = extract_dates(&mut record, &labels, &names)?;
    let email = extract_emails(&mut record);
    let phone = extract_phones(&mut record);

    tracing::trace!(consumed = ?record.consumed(), "Normalized record");

    let entry = Entry {
        given_name: names.given,
        family_name: names.family,
        image,
        address,
        phone,
        email,
        birthday: dates.birthday,
        children: dates.children,
        anniversary: dates.anniversary.unwrap_or_default(),
    };

    Ok(Normalized {
        entry,
        labels,
        remaining: record.into_remaining(),
    })
}
