//! Normalization engine for `vcf2csv`.
//!
//! Converts one decoded vCard ([`vcf2csv_rfc::rfc::vcard::RawRecord`]) at a time
//! into a flat [`entry::Entry`], or a [`error::NormalizeError`] naming the
//! occurrence that could not be represented.
//!
//! ```text
//! RawRecord ──► labels ──► names ──► addresses ──► dates ──► contacts ──► Entry
//!                                                                    └──► remaining fields
//! ```
//!
//! Normalization is a pure function of the record: no I/O, no shared state.
//! Whether a failing record halts a run is the caller's decision.

pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod normalize;

pub use entry::Entry;
pub use error::{NormalizeError, NormalizeResult};
pub use normalize::{Normalized, normalize};
