//! The compacted run record and its 32-bit packing.

use std::fmt;

use thiserror::Error;

use crate::layout::{
    field_mask, CODE_POINT_BITS, MAX_CODE_POINT, MAX_RUN_LENGTH, RULE_BITS, RUN_LENGTH_BITS,
};
use crate::GrammarRule;

const LENGTH_SHIFT: u32 = CODE_POINT_BITS;
const RULE_SHIFT: u32 = CODE_POINT_BITS + RUN_LENGTH_BITS;

/// A value that does not fit a run record.
///
/// These indicate a bug in whatever fed the encoder, never a property of the
/// Unicode data; nothing is truncated to make it fit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error(
        "run start U+{code_point:04X} does not fit in {bits} bits (max U+{max:04X})",
        bits = CODE_POINT_BITS,
        max = MAX_CODE_POINT
    )]
    CodePointOverflow { code_point: u32 },
    #[error("run at U+{start:04X} has length {length}, which exceeds {max}", max = MAX_RUN_LENGTH)]
    RunLengthOverflow { start: u32, length: u32 },
    #[error("run at U+{start:04X} is empty")]
    EmptyRun { start: u32 },
    #[error(
        "run at U+{start:04X} of length {length} extends beyond U+{max:04X}",
        max = MAX_CODE_POINT
    )]
    RunPastEnd { start: u32, length: u16 },
    #[error("rule code {code:#04b} does not name a grammar rule")]
    UnknownRule { code: u8 },
    #[error("U+{code_point:04X} was fed after U+{previous:04X}; code points must ascend")]
    OutOfOrder { previous: u32, code_point: u32 },
}

/// `length` consecutive code points starting at `start`, all mapped to
/// `rule`.
///
/// Construction checks every field against its bit width, so a
/// `RunRecord` always packs losslessly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunRecord {
    start: u32,
    length: u16,
    rule: GrammarRule,
}

impl RunRecord {
    pub fn new(start: u32, length: u16, rule: GrammarRule) -> Result<Self, EncodeError> {
        if start > MAX_CODE_POINT {
            return Err(EncodeError::CodePointOverflow { code_point: start });
        }
        if length == 0 {
            return Err(EncodeError::EmptyRun { start });
        }
        if length > MAX_RUN_LENGTH {
            return Err(EncodeError::RunLengthOverflow {
                start,
                length: u32::from(length),
            });
        }
        if start + u32::from(length) - 1 > MAX_CODE_POINT {
            return Err(EncodeError::RunPastEnd { start, length });
        }
        Ok(RunRecord {
            start,
            length,
            rule,
        })
    }

    #[inline]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[inline]
    pub const fn length(self) -> u16 {
        self.length
    }

    #[inline]
    pub const fn rule(self) -> GrammarRule {
        self.rule
    }

    /// The last code point in the run (inclusive).
    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.length as u32 - 1
    }

    #[inline]
    pub const fn contains(self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end()
    }

    /// Pack into one word: code point in bits 0..21, length in 21..30,
    /// rule in 30..32.
    pub const fn pack(self) -> u32 {
        self.start | ((self.length as u32) << LENGTH_SHIFT) | ((self.rule.code() as u32) << RULE_SHIFT)
    }

    /// Inverse of [`RunRecord::pack`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length and rule are masked to 9 and 2 bits"
    )]
    pub fn unpack(word: u32) -> Result<Self, EncodeError> {
        let start = word & field_mask(CODE_POINT_BITS);
        let length = ((word >> LENGTH_SHIFT) & field_mask(RUN_LENGTH_BITS)) as u16;
        let code = ((word >> RULE_SHIFT) & field_mask(RULE_BITS)) as u8;
        let rule = GrammarRule::from_code(code).ok_or(EncodeError::UnknownRule { code })?;
        RunRecord::new(start, length, rule)
    }
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ 0x{:04x}, {}, {} }}",
            self.start,
            self.length,
            self.rule.code()
        )
    }
}
