//! Explicit field consumption over one record.

use std::collections::BTreeSet;

use vcf2csv_rfc::rfc::vcard::{FieldOccurrence, RawRecord};

/// A record being normalized.
///
/// Extraction steps [`take`](Self::take) the fields they understand, which
/// moves the occurrences out. Occurrences a step declines go back through
/// [`restore`](Self::restore). Whatever is left at the end was not understood.
#[derive(Debug)]
pub struct WorkingRecord {
    remaining: RawRecord,
    consumed: BTreeSet<&'static str>,
}

impl WorkingRecord {
    #[must_use]
    pub fn new(record: RawRecord) -> Self {
        Self {
            remaining: record,
            consumed: BTreeSet::new(),
        }
    }

    /// Moves every occurrence of `name` out of the record.
    pub fn take(&mut self, name: &'static str) -> Vec<FieldOccurrence> {
        self.consumed.insert(name);
        self.remaining.remove(name)
    }

    /// Puts occurrences of `name` back as not understood.
    pub fn restore(&mut self, name: &'static str, occurrences: Vec<FieldOccurrence>) {
        for occurrence in occurrences {
            self.remaining.push(name, occurrence);
        }
    }

    /// Field names taken so far, including ones that were absent.
    #[must_use]
    pub fn consumed(&self) -> &BTreeSet<&'static str> {
        &self.consumed
    }

    /// Ends the pass and returns the fields nobody took.
    #[must_use]
    pub fn into_remaining(self) -> RawRecord {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_moves_and_restore_returns() {
        let raw = RawRecord::new()
            .with("NOTE", FieldOccurrence::new("a"))
            .with("NOTE", FieldOccurrence::new("b"))
            .with("URL", FieldOccurrence::new("c"));
        let mut record = WorkingRecord::new(raw);

        let mut notes = record.take("NOTE");
        assert_eq!(notes.len(), 2);
        assert!(record.take("TEL").is_empty());

        notes.truncate(1);
        record.restore("NOTE", notes);

        assert!(record.consumed().contains("TEL"));
        let remaining = record.into_remaining();
        assert_eq!(remaining.get("NOTE"), [FieldOccurrence::new("a")]);
        assert!(remaining.contains("URL"));
    }
}
