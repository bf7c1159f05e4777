//! Code point run compaction.
//!
//! Turns the Unicode code point space into an ordered list of run records,
//! each naming a span of consecutive code points that share one lexer
//! grammar rule (whitespace, identifier start, identifier part). A lexer
//! binary-searches the list to classify a character.
//!
//! # Pipeline
//!
//! ```text
//! all_code_points() -> Classifier::classify -> RunEncoder -> RunTable
//! ```
//!
//! - [`Classifier`] maps a general category to a [`GrammarRule`], after
//!   applying a fixed table of per-code-point [`Override`]s.
//! - [`CodePoints`] yields `0..=0x10FFFF` lazily, in ascending order.
//! - [`RunEncoder`] merges adjacent code points with equal rules into
//!   [`RunRecord`]s, splitting runs at [`MAX_RUN_LENGTH`].
//! - [`RunTable`] is the finished, validated list.
//!
//! Every record packs into 32 bits: 21 for the start code point, 9 for the
//! run length and 2 for the rule. Nothing is ever truncated to fit; values
//! that overflow a field are reported as [`EncodeError`]s.

mod classify;
mod encoder;
mod layout;
mod pipeline;
mod record;
mod rule;
mod sequence;
mod table;

pub use classify::{rule_for_category, Classifier, ClassifierError, Override, STANDARD_OVERRIDES};
pub use encoder::{RunEncoder, RunState};
pub use layout::{
    CODE_POINT_BITS, MAX_CODE_POINT, MAX_RULE, MAX_RUN_LENGTH, RECORD_BITS, RULE_BITS,
    RUN_LENGTH_BITS,
};
pub use pipeline::{build_table, encode, BuildError};
pub use record::{EncodeError, RunRecord};
pub use rule::{GrammarRule, IDENTIFIER_PART_MASK};
pub use sequence::{all_code_points, CodePoints};
pub use table::{RunTable, TableError};

pub use cprun_ucd::{GeneralCategory, UnicodeDatabase};
