//! Bit widths of a packed run record.
//!
//! ```text
//!  31 30 29              21 20                          0
//! [rule ][     length      ][         code point         ]
//! ```

/// Bits holding the first code point of a run.
pub const CODE_POINT_BITS: u32 = 21;
/// Bits holding the number of code points in a run.
pub const RUN_LENGTH_BITS: u32 = 9;
/// Bits holding the grammar rule code.
pub const RULE_BITS: u32 = 2;
/// Width of one packed record.
pub const RECORD_BITS: u32 = 32;

/// The largest code point defined by Unicode.
pub const MAX_CODE_POINT: u32 = cprun_ucd::MAX_CODE_POINT;
/// The longest run a single record can describe.
pub const MAX_RUN_LENGTH: u16 = 511;
/// The largest rule code the rule field can hold.
pub const MAX_RULE: u8 = 0b11;

pub(crate) const fn field_mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

const _: () = assert!(CODE_POINT_BITS + RUN_LENGTH_BITS + RULE_BITS <= RECORD_BITS);
const _: () = assert!(MAX_CODE_POINT <= field_mask(CODE_POINT_BITS));
const _: () = assert!(MAX_RUN_LENGTH as u32 == field_mask(RUN_LENGTH_BITS));
const _: () = assert!(MAX_RULE as u32 == field_mask(RULE_BITS));
