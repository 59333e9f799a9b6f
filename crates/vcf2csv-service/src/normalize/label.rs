//! Group label resolution.
//!
//! Apple Address Book attaches a free-text `X-ABLABEL` to fields sharing its
//! group (`item1.X-ABDATE` + `item1.X-ABLABEL`). Built-in labels are wrapped
//! as `_$!<Anniversary>!$_`; user labels are plain text.

use std::collections::BTreeMap;

use vcf2csv_rfc::rfc::vcard::names;

use super::working::WorkingRecord;

const VENDOR_PREFIX: &str = "_$!<";
const VENDOR_SUFFIX: &str = ">!$_";

/// Label names the engine acts on.
pub mod labels {
    pub const ANNIVERSARY: &str = "Anniversary";
    pub const BIRTHDAY: &str = "Birthday";
    pub const CHILD: &str = "Child";
    pub const PARTNER: &str = "Partner";
    pub const SPOUSE: &str = "Spouse";
}

/// Group id to normalized label for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap(BTreeMap<String, String>);

impl LabelMap {
    /// Returns the label attached to `group`.
    #[must_use]
    pub fn resolve(&self, group: &str) -> Option<&str> {
        self.0.get(group).map(String::as_str)
    }

    /// Sets the label for `group`, returning the label it replaced.
    pub fn insert(&mut self, group: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.0.insert(group.into(), label.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(group, label)| (group.as_str(), label.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// ## Summary
/// Strips the vendor `_$!<...>!$_` wrapping from a label.
///
/// Idempotent: a plain label is returned as is.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(VENDOR_PREFIX)
        .and_then(|inner| inner.strip_suffix(VENDOR_SUFFIX))
        .unwrap_or(trimmed)
        .to_string()
}

/// ## Summary
/// Builds the label map from every grouped `X-ABLABEL` occurrence and consumes
/// the field.
///
/// A repeated group keeps the last label seen. An ungrouped label links to
/// nothing and is put back as unused.
pub fn resolve_labels(record: &mut WorkingRecord) -> LabelMap {
    let mut map = LabelMap::default();
    let mut ungrouped = Vec::new();

    for occurrence in record.take(names::X_ABLABEL) {
        if !occurrence.has_group() {
            ungrouped.push(occurrence);
            continue;
        }
        let label = normalize_label(&occurrence.value);
        if let Some(previous) = map.insert(occurrence.group.clone(), label) {
            tracing::debug!(
                group = %occurrence.group,
                replaced = %previous,
                "Group labelled more than once, keeping the last label"
            );
        }
    }

    record.restore(names::X_ABLABEL, ungrouped);
    map
}
