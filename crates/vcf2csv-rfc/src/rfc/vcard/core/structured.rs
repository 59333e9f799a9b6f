//! Structured `N` and `ADR` values.
//!
//! Components are unescaped but not split on `,`; the export keeps
//! multi-valued components verbatim.

/// `N`: family;given;additional;prefixes;suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub additional: String,
    pub prefixes: String,
    pub suffixes: String,
}

/// `ADR`: po box;extended;street;locality;region;postal code;country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub po_box: String,
    /// Apartment or suite.
    pub extended: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Whether the post office box or extended component is set. Neither fits
    /// a street-plus-locality layout.
    #[must_use]
    pub fn has_box_or_extended(&self) -> bool {
        !self.po_box.is_empty() || !self.extended.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_address_has_no_box() {
        let address = Address {
            street: "1 Main St".to_string(),
            locality: "Springfield".to_string(),
            ..Address::default()
        };
        assert!(!address.has_box_or_extended());
    }

    #[test]
    fn box_or_suite_is_flagged() {
        let po_box = Address {
            po_box: "PO Box 9".to_string(),
            ..Address::default()
        };
        let suite = Address {
            extended: "Suite 200".to_string(),
            ..Address::default()
        };
        assert!(po_box.has_box_or_extended());
        assert!(suite.has_box_or_extended());
    }
}
