//! vCard decoding for `vcf2csv`.
//!
//! Turns a vCard byte stream into [`rfc::vcard::RawRecord`]s: field name to
//! ordered occurrences, each with its group and parameters. No interpretation
//! of values happens here beyond the structured-value helpers used by the
//! normalization engine.

pub mod error;
pub mod rfc;
