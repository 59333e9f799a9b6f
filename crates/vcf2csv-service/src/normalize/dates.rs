//! Birthday, children and anniversary extraction.
//!
//! Sources, in order:
//! - `X-ABDATE` labelled Anniversary sets the anniversary
//! - `BDAY` adds the card owner's birthday
//! - `X-ABRELATEDNAMES` adds birthdays and children or sets the anniversary,
//!   depending on its label

use vcf2csv_rfc::rfc::vcard::{FieldOccurrence, names};

use super::format::{format_date, format_named};
use super::label::{LabelMap, labels};
use super::name::Names;
use super::working::WorkingRecord;
use crate::error::{NormalizeError, NormalizeResult};

const ANNIVERSARY_FIELD: &str = "anniversary";

/// Date-like values taken from a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dates {
    pub birthday: Vec<String>,
    pub children: Vec<String>,
    pub anniversary: Option<String>,
}

impl Dates {
    /// Sets the anniversary once; a second assignment is an error.
    fn set_anniversary(&mut self, value: String, occurrence: FieldOccurrence) -> NormalizeResult<()> {
        if self.anniversary.is_some() {
            return Err(NormalizeError::DuplicateValue {
                field: ANNIVERSARY_FIELD,
                occurrence,
            });
        }
        self.anniversary = Some(value);
        Ok(())
    }
}

/// What a related-name occurrence contributes, by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Birthday,
    Child,
    Anniversary,
}

impl Relation {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            labels::BIRTHDAY | labels::PARTNER | labels::SPOUSE => Some(Self::Birthday),
            labels::CHILD => Some(Self::Child),
            labels::ANNIVERSARY => Some(Self::Anniversary),
            _ => None,
        }
    }
}

/// ## Summary
/// Extracts birthdays, children and the anniversary.
///
/// `X-ABDATE` and `BDAY` are always consumed. `X-ABRELATEDNAMES` occurrences
/// with an unrecognized label are left in the record.
///
/// ## Errors
/// - [`NormalizeError::UnknownDateField`] for an `X-ABDATE` not labelled Anniversary
/// - [`NormalizeError::DuplicateValue`] for a second anniversary
pub fn extract_dates(
    record: &mut WorkingRecord,
    label_map: &LabelMap,
    person: &Names,
) -> NormalizeResult<Dates> {
    let mut dates = Dates::default();

    extract_custom_dates(record, label_map, &mut dates)?;

    if let Some(birthday) = record.take(names::BDAY).into_iter().next() {
        let date = format_date(&birthday.value);
        if person.co_resident.is_some() {
            dates.birthday.push(format!("{}: {date}", person.primary));
        } else {
            dates.birthday.push(date);
        }
    }

    extract_related_names(record, label_map, &mut dates)?;

    Ok(dates)
}

fn extract_custom_dates(
    record: &mut WorkingRecord,
    label_map: &LabelMap,
    dates: &mut Dates,
) -> NormalizeResult<()> {
    for occurrence in record.take(names::X_ABDATE) {
        match label_map.resolve(&occurrence.group) {
            Some(labels::ANNIVERSARY) => {
                let value = format_date(&occurrence.value);
                dates.set_anniversary(value, occurrence)?;
            }
            label => {
                return Err(NormalizeError::UnknownDateField {
                    label: label.map(String::from),
                    occurrence,
                });
            }
        }
    }
    Ok(())
}

fn extract_related_names(
    record: &mut WorkingRecord,
    label_map: &LabelMap,
    dates: &mut Dates,
) -> NormalizeResult<()> {
    let mut unrecognized = Vec::new();

    for occurrence in record.take(names::X_ABRELATEDNAMES) {
        let relation = label_map
            .resolve(&occurrence.group)
            .and_then(Relation::from_label);
        let Some(relation) = relation else {
            unrecognized.push(occurrence);
            continue;
        };

        let value = format_named(&occurrence.value, format_date);
        match relation {
            Relation::Birthday => dates.birthday.push(value),
            Relation::Child => dates.children.push(value),
            Relation::Anniversary => dates.set_anniversary(value, occurrence)?,
        }
    }

    if !unrecognized.is_empty() {
        tracing::trace!(
            count = unrecognized.len(),
            "Leaving related names with unrecognized labels"
        );
    }
    record.restore(names::X_ABRELATEDNAMES, unrecognized);

    Ok(())
}
