//! Field names understood by the decoder and the normalization engine.

// Identification
pub const FN: &str = "FN";
pub const N: &str = "N";
pub const PHOTO: &str = "PHOTO";
pub const BDAY: &str = "BDAY";

// Delivery addressing
pub const ADR: &str = "ADR";

// Communications
pub const TEL: &str = "TEL";
pub const EMAIL: &str = "EMAIL";

// Explanatory
pub const CATEGORIES: &str = "CATEGORIES";
pub const PRODID: &str = "PRODID";
pub const UID: &str = "UID";

// General/structural
pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";
pub const VERSION: &str = "VERSION";

/// Value of BEGIN/END that delimits a record.
pub const VCARD: &str = "VCARD";

/// Prefix of the Apple Address Book extension fields.
pub const APPLE_PREFIX: &str = "X-AB";

/// Free-text label attached to the fields sharing its group.
pub const X_ABLABEL: &str = const_str::concat!(APPLE_PREFIX, "LABEL");

/// Labelled custom date ("Anniversary", "Other", ...).
pub const X_ABDATE: &str = const_str::concat!(APPLE_PREFIX, "DATE");

/// Labelled related person ("Child", "Spouse", ...).
pub const X_ABRELATEDNAMES: &str = const_str::concat!(APPLE_PREFIX, "RELATEDNAMES");
