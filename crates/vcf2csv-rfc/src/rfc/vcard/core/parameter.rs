//! Content line parameters.

/// Name of the TYPE parameter.
pub const TYPE: &str = "TYPE";

/// TYPE values with a fixed meaning.
pub mod types {
    pub const PREF: &str = "pref";
    pub const VOICE: &str = "voice";
    /// vCard 3.0 email type, implied by the property itself.
    pub const INTERNET: &str = "internet";
}

/// One `;NAME=value,value` parameter as written on a line.
///
/// Repeats are merged later by [`super::FieldOccurrence::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Uppercased.
    pub name: String,
    /// Case preserved.
    pub values: Vec<String>,
}

impl VCardParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::multi(name, vec![value.into()])
    }

    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self { name, values }
    }

    /// A TYPE parameter; also the reading of a vCard 2.1 bare parameter
    /// such as `HOME` in `TEL;HOME:...`.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(TYPE, value)
    }
}
