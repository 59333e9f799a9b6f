//! The flat contact row produced by normalization.

/// Column headers, in export order.
pub const COLUMNS: [&str; 9] = [
    "Given Name",
    "Family Name",
    "Image",
    "Address",
    "Phone",
    "Email",
    "Birthday",
    "Children",
    "Anniversary",
];

/// Separator between addresses, which are themselves two lines.
const ADDRESS_SEPARATOR: &str = "\n\n";

/// Separator for every other multi-valued column.
const LINE_SEPARATOR: &str = "\n";

/// A normalized contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub given_name: String,
    pub family_name: String,
    pub image: String,
    pub address: Vec<String>,
    pub phone: Vec<String>,
    pub email: Vec<String>,
    pub birthday: Vec<String>,
    pub children: Vec<String>,
    pub anniversary: String,
}

impl Entry {
    /// ## Summary
    /// Converts the entry to its fixed 9-column row, in [`COLUMNS`] order.
    #[must_use]
    pub fn to_row(&self) -> [String; 9] {
        [
            self.given_name.clone(),
            self.family_name.clone(),
            self.image.clone(),
            self.address.join(ADDRESS_SEPARATOR),
            self.phone.join(LINE_SEPARATOR),
            self.email.join(LINE_SEPARATOR),
            self.birthday.join(LINE_SEPARATOR),
            self.children.join(LINE_SEPARATOR),
            self.anniversary.clone(),
        ]
    }
}
