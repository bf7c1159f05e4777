//! End-to-end table construction.

use cprun_ucd::UnicodeDatabase;
use thiserror::Error;

use crate::{
    all_code_points, Classifier, ClassifierError, EncodeError, GrammarRule, RunEncoder, RunTable,
    TableError,
};

/// Any failure while building a run table. All of them are fatal: no
/// partial table is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Classify every code point in `db` and compact the result.
#[tracing::instrument(level = "debug", skip_all, fields(overrides = classifier.overrides().len()))]
pub fn build_table<D: UnicodeDatabase + ?Sized>(
    db: &D,
    classifier: &Classifier,
) -> Result<RunTable, BuildError> {
    let verdicts = all_code_points()
        .map(|code_point| (code_point, classifier.classify(code_point, db.category(code_point))));
    let table = encode(verdicts)?;
    table.validate()?;
    tracing::debug!(
        runs = table.len(),
        longest_run = table.longest_run(),
        "code point runs encoded"
    );
    Ok(table)
}

/// Run-length encode `(code point, rule)` pairs given in ascending order.
pub fn encode<I>(verdicts: I) -> Result<RunTable, EncodeError>
where
    I: IntoIterator<Item = (u32, Option<GrammarRule>)>,
{
    let mut encoder = RunEncoder::new();
    for (code_point, rule) in verdicts {
        encoder.push(code_point, rule)?;
    }
    encoder.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code — panics provide clear failure messages")]
mod tests;
