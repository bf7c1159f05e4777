//! Lazy iteration over the code point space.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::layout::MAX_CODE_POINT;

/// Every code point in an inclusive range, ascending, without gaps.
///
/// Cloning yields an independent iterator at the same position, so a
/// sequence can be restarted from a saved copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePoints {
    next: u32,
    last: u32,
    exhausted: bool,
}

impl CodePoints {
    /// Yields what `range` itself would still yield, so an exhausted range
    /// gives an empty sequence.
    pub fn new(range: RangeInclusive<u32>) -> Self {
        CodePoints {
            next: *range.start(),
            last: *range.end(),
            exhausted: range.is_empty(),
        }
    }
}

/// `U+0000 ..= U+10FFFF`.
pub fn all_code_points() -> CodePoints {
    CodePoints::new(0..=MAX_CODE_POINT)
}

impl Iterator for CodePoints {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.exhausted {
            return None;
        }
        let code_point = self.next;
        if code_point == self.last {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        Some(code_point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            (self.last - self.next) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CodePoints {}

impl FusedIterator for CodePoints {}
