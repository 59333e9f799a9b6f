//! Shared configuration, constants and error types for the `vcf2csv` crates.

pub mod config;
pub mod constants;
pub mod error;
