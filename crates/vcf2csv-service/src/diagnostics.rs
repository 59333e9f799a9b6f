//! Reporting on what normalization left behind.

use std::collections::BTreeMap;

use serde::Serialize;
use vcf2csv_rfc::rfc::vcard::{FieldOccurrence, RawRecord, names};

use crate::normalize::Normalized;

/// Fields that carry nothing worth exporting and are never reported.
pub const IGNORED_FIELDS: [&str; 4] = [names::UID, names::VERSION, names::CATEGORIES, names::PRODID];

/// Returns whether `name` is on the ignore-list.
#[must_use]
pub fn is_ignored(name: &str) -> bool {
    IGNORED_FIELDS.contains(&name)
}

/// ## Summary
/// Lists the fields of `remaining` that are not on the ignore-list.
#[must_use]
pub fn unused_fields(remaining: &RawRecord) -> Vec<(&str, &[FieldOccurrence])> {
    remaining
        .iter()
        .filter(|(name, _)| !is_ignored(name))
        .collect()
}

/// ## Summary
/// Emits the label map and unused fields of one normalized record as
/// `debug` events.
pub fn log_diagnostics(index: usize, normalized: &Normalized) {
    if !normalized.labels.is_empty() {
        let labels: Vec<String> = normalized
            .labels
            .iter()
            .map(|(group, label)| format!("{group}={label}"))
            .collect();
        tracing::debug!(record = index, labels = ?labels, "Resolved group labels");
    }

    for (name, occurrences) in unused_fields(&normalized.remaining) {
        for occurrence in occurrences {
            tracing::debug!(record = index, field = name, %occurrence, "Unused field");
        }
    }
}

/// Maximum occurrences of each field in any single record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Census(BTreeMap<String, usize>);

impl Census {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one decoded record into the census.
    pub fn observe(&mut self, record: &RawRecord) {
        for (name, occurrences) in record.iter().filter(|(name, _)| !is_ignored(name)) {
            let max = self.0.entry(name.to_string()).or_default();
            *max = (*max).max(occurrences.len());
        }
    }

    /// Returns the maximum seen for `name`, zero when never seen.
    #[must_use]
    pub fn max_occurrences(&self, name: &str) -> usize {
        self.0.get(name).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, max)| (name.as_str(), *max))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
