//! Core vCard record types.

mod occurrence;
mod parameter;
mod record;
mod structured;

pub mod names;

pub use occurrence::{FieldOccurrence, Params};
pub use parameter::{TYPE, VCardParameter, types};
pub use record::RawRecord;
pub use structured::{Address, StructuredName};
