//! Raw decoded record.

use std::collections::BTreeMap;

use super::occurrence::FieldOccurrence;

/// One decoded vCard: field name to its occurrences in source order.
///
/// Field names are uppercase. Names are iterated in sorted order so that
/// diagnostics are deterministic; occurrence order within a name is never
/// changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, Vec<FieldOccurrence>>,
}

impl RawRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an occurrence under `name`.
    pub fn push(&mut self, name: impl Into<String>, occurrence: FieldOccurrence) {
        self.fields
            .entry(name.into().to_ascii_uppercase())
            .or_default()
            .push(occurrence);
    }

    /// Appends an occurrence, returning the updated record.
    #[must_use]
    pub fn with(mut self, name: &str, occurrence: FieldOccurrence) -> Self {
        self.push(name, occurrence);
        self
    }

    /// Returns the occurrences of `name`, empty when absent.
    #[must_use]
    pub fn get(&self, name: &str) -> &[FieldOccurrence] {
        self.fields.get(name).map_or(&[], Vec::as_slice)
    }

    /// Removes `name` and returns its occurrences, empty when absent.
    pub fn remove(&mut self, name: &str) -> Vec<FieldOccurrence> {
        self.fields.remove(name).unwrap_or_default()
    }

    /// Returns whether the record has at least one occurrence of `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates field names with their occurrences.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldOccurrence])> {
        self.fields
            .iter()
            .map(|(name, occurrences)| (name.as_str(), occurrences.as_slice()))
    }

    /// Number of distinct field names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
