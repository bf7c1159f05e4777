//! Run-length encoding of per-code-point verdicts.
//!
//! The encoder holds at most one run in progress. Each code point either
//! extends that run (same rule, directly adjacent, below the length cap) or
//! closes it and opens the next one. Code points without a rule close the
//! open run and leave the encoder idle; they are never recorded.

use std::mem;

use crate::layout::{MAX_CODE_POINT, MAX_RUN_LENGTH};
use crate::{EncodeError, GrammarRule, RunRecord, RunTable};

/// The run in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run is open.
    #[default]
    Idle,
    /// `length` code points from `start` share `rule`.
    Open {
        start: u32,
        rule: GrammarRule,
        length: u16,
    },
}

impl RunState {
    /// A fresh run at `code_point`, or `Idle` when there is no rule.
    fn open(code_point: u32, rule: Option<GrammarRule>) -> Self {
        match rule {
            Some(rule) => RunState::Open {
                start: code_point,
                rule,
                length: 1,
            },
            None => RunState::Idle,
        }
    }

    /// Grow the open run by `code_point` if it continues it. Returns whether
    /// the run was extended.
    fn extend(&mut self, code_point: u32, rule: Option<GrammarRule>) -> bool {
        match self {
            RunState::Open {
                start,
                rule: open_rule,
                length,
            } if rule == Some(*open_rule)
                && *length < MAX_RUN_LENGTH
                && u32::from(*length) == code_point - *start =>
            {
                *length += 1;
                true
            }
            _ => false,
        }
    }

    /// End the open run, leaving `Idle` behind.
    fn close(&mut self) -> Result<Option<RunRecord>, EncodeError> {
        match mem::take(self) {
            RunState::Idle => Ok(None),
            RunState::Open {
                start,
                rule,
                length,
            } => RunRecord::new(start, length, rule).map(Some),
        }
    }

    fn length(self) -> u16 {
        match self {
            RunState::Idle => 0,
            RunState::Open { length, .. } => length,
        }
    }
}

/// Accumulates run records from code points fed in ascending order.
#[derive(Clone, Debug, Default)]
pub struct RunEncoder {
    state: RunState,
    runs: Vec<RunRecord>,
    previous: Option<u32>,
    longest_run: u16,
}

impl RunEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Records closed so far.
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Feed the verdict for the next code point.
    ///
    /// Code points must be strictly ascending and within the code space.
    /// Skipped code points are treated as having no rule.
    pub fn push(&mut self, code_point: u32, rule: Option<GrammarRule>) -> Result<(), EncodeError> {
        if code_point > MAX_CODE_POINT {
            return Err(EncodeError::CodePointOverflow { code_point });
        }
        if let Some(previous) = self.previous {
            if code_point <= previous {
                return Err(EncodeError::OutOfOrder {
                    previous,
                    code_point,
                });
            }
        }
        self.previous = Some(code_point);

        if !self.state.extend(code_point, rule) {
            self.close_run()?;
            self.state = RunState::open(code_point, rule);
        }
        self.longest_run = self.longest_run.max(self.state.length());
        Ok(())
    }

    fn close_run(&mut self) -> Result<(), EncodeError> {
        if let Some(record) = self.state.close()? {
            self.runs.push(record);
        }
        Ok(())
    }

    /// Close the last run and hand over the records.
    pub fn finish(mut self) -> Result<RunTable, EncodeError> {
        self.close_run()?;
        Ok(RunTable::from_parts(self.runs, self.longest_run))
    }
}
