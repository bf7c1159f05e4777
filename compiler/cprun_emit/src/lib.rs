//! Source generators for code point run tables.
//!
//! Each generator implements [`TableEmitter`] and writes one artifact:
//!
//! - [`CppHeader`]: the `grammar_rule` enum, the `cprun` bit-field struct
//!   and an `extern` declaration of the table.
//! - [`CppSource`]: the table definition, one commented row per record.
//! - [`RustSource`]: a self-contained Rust module holding the packed table.
//!
//! Rule names are spelled by a [`RuleNaming`] scheme so each target language
//! gets its own conventions.

mod cpp;
mod naming;
mod rust;

pub use cpp::{CppHeader, CppSource, DEFAULT_HEADER_FILE, DEFAULT_INCLUDE_GUARD};
pub use naming::{PascalCase, RuleNaming, SnakeCase};
pub use rust::RustSource;

use std::io::{self, Write};

use cprun_core::{RunTable, UnicodeDatabase};
use thiserror::Error;

/// Name printed for a run whose first code point is not in the database.
const UNNAMED: &str = "<unassigned>";

/// Failure to generate an artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot write generated source: {0}")]
    Io(#[from] io::Error),
    #[error("`{guard}` is not a valid preprocessor identifier")]
    InvalidIncludeGuard { guard: String },
}

/// A generator for one artifact derived from a run table.
pub trait TableEmitter {
    /// Write the artifact for `table` to `out`. `db` supplies the character
    /// names used in comments.
    fn emit(
        &self,
        table: &RunTable,
        db: &dyn UnicodeDatabase,
        out: &mut dyn Write,
    ) -> Result<(), EmitError>;

    /// Render the whole artifact into memory.
    fn render(&self, table: &RunTable, db: &dyn UnicodeDatabase) -> Result<Vec<u8>, EmitError> {
        let mut buf = Vec::new();
        self.emit(table, db, &mut buf)?;
        Ok(buf)
    }
}

/// The database name of `code_point`, or a placeholder.
pub(crate) fn name_of(db: &dyn UnicodeDatabase, code_point: u32) -> &str {
    db.lookup(code_point)
        .map_or(UNNAMED, |record| record.name.as_str())
}

/// Returns `","` when `index` is not the last of `total` items.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}
