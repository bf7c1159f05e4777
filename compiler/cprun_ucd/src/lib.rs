//! Unicode Character Database access for the code point run generator.
//!
//! This crate decodes the parts of `UnicodeData.txt` the generator cares
//! about: each assigned code point's name and general category. Everything
//! else in the file (bidi class, decomposition, numeric values, case
//! mappings) is checked for shape and otherwise ignored.
//!
//! Consumers depend on the [`UnicodeDatabase`] trait rather than on the
//! concrete [`UnicodeData`] table, so tests can supply hand-built fixtures.

mod category;
mod database;

pub use category::GeneralCategory;
pub use database::{CodePointRecord, UcdError, UcdErrorKind, UnicodeData, UnicodeDatabase};

/// The largest code point defined by Unicode.
pub const MAX_CODE_POINT: u32 = 0x0010_FFFF;
