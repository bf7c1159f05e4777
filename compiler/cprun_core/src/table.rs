//! The finished run table.

use thiserror::Error;

use crate::layout::MAX_RUN_LENGTH;
use crate::{GrammarRule, RunRecord};

/// A run table that breaks the ordering or maximality guarantees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("run at U+{start:04X} overlaps or precedes the run ending at U+{previous_end:04X}")]
    Overlap { previous_end: u32, start: u32 },
    #[error("run at U+{start:04X} continues the previous {rule} run, which is not full")]
    Unmerged { start: u32, rule: GrammarRule },
}

/// Run records in ascending code point order, with disjoint intervals.
///
/// Code points not covered by any record have no grammar rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunTable {
    runs: Vec<RunRecord>,
    longest_run: u16,
}

impl RunTable {
    pub(crate) fn from_parts(runs: Vec<RunRecord>, longest_run: u16) -> Self {
        RunTable { runs, longest_run }
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RunRecord> {
        self.runs.iter()
    }

    /// The length of the longest run seen while encoding, capped at
    /// [`MAX_RUN_LENGTH`].
    pub fn longest_run(&self) -> u16 {
        self.longest_run
    }

    /// The rule for `code_point`, found by binary search the way a lexer
    /// consuming the emitted table does.
    pub fn lookup(&self, code_point: u32) -> Option<GrammarRule> {
        let idx = self.runs.partition_point(|run| run.end() < code_point);
        self.runs
            .get(idx)
            .filter(|run| run.contains(code_point))
            .map(|run| run.rule())
    }

    /// Every record packed into one word, in table order.
    pub fn packed(&self) -> Vec<u32> {
        self.runs.iter().map(|run| run.pack()).collect()
    }

    /// Check that records ascend without overlap and that no run was split
    /// except at the length cap.
    pub fn validate(&self) -> Result<(), TableError> {
        for pair in self.runs.windows(2) {
            let (previous, run) = (pair[0], pair[1]);
            if run.start() <= previous.end() {
                return Err(TableError::Overlap {
                    previous_end: previous.end(),
                    start: run.start(),
                });
            }
            if run.start() == previous.end() + 1
                && run.rule() == previous.rule()
                && previous.length() < MAX_RUN_LENGTH
            {
                return Err(TableError::Unmerged {
                    start: run.start(),
                    rule: run.rule(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RunTable {
    type Item = &'a RunRecord;
    type IntoIter = std::slice::Iter<'a, RunRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code — panics provide clear failure messages")]
mod tests;
