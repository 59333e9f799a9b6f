//! A single occurrence of a vCard field.

use std::collections::BTreeMap;
use std::fmt;

use super::parameter::VCardParameter;

/// Parameter name (uppercase) to values in order of appearance.
pub type Params = BTreeMap<String, Vec<String>>;

/// One occurrence of a field within a record.
///
/// The field name is the key it is stored under in [`super::RawRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOccurrence {
    /// Raw value string, escapes intact.
    pub value: String,
    /// Group prefix (e.g., "item1" in "item1.TEL"), empty when absent.
    pub group: String,
    /// Parameters merged by name.
    pub params: Params,
}

impl FieldOccurrence {
    /// Creates an ungrouped occurrence with no parameters.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Creates an occurrence belonging to `group`.
    #[must_use]
    pub fn grouped(group: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            group: group.into(),
            params: Params::new(),
        }
    }

    /// Builds an occurrence from content line parts.
    ///
    /// Repeated parameters (`TYPE=home;TYPE=cell`) are merged into one entry.
    #[must_use]
    pub fn from_parts(group: Option<String>, params: Vec<VCardParameter>, value: String) -> Self {
        let mut merged = Params::new();
        for param in params {
            merged.entry(param.name).or_default().extend(param.values);
        }

        Self {
            value,
            group: group.unwrap_or_default(),
            params: merged,
        }
    }

    /// Adds a parameter value, returning the updated occurrence.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params
            .entry(name.to_ascii_uppercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns the values of a parameter, empty when absent.
    #[must_use]
    pub fn param_values(&self, name: &str) -> &[String] {
        self.params
            .get(&name.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns whether the occurrence carries a group id.
    #[must_use]
    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }
}

impl fmt::Display for FieldOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)?;
        if self.has_group() {
            write!(f, " (group {})", self.group)?;
        }
        Ok(())
    }
}
