//! Table generation for one command line.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use cprun_core::{build_table, BuildError, Classifier};
use cprun_emit::{CppHeader, CppSource, RustSource, TableEmitter};
use cprun_ucd::UnicodeData;

use crate::{CliError, GenerateOptions, Mode};

/// Load the database, generate the artifact and write it out.
///
/// Nothing is written unless the whole artifact was generated.
pub fn run(options: &GenerateOptions) -> Result<(), CliError> {
    let bytes = generate(options)?;
    write_output(options.output.as_deref(), &bytes)
}

/// Load the database named by `options` and render the artifact.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?options.mode))]
pub fn generate(options: &GenerateOptions) -> Result<Vec<u8>, CliError> {
    let db = UnicodeData::from_path(&options.unicode_data)?;
    tracing::debug!(path = %options.unicode_data.display(), "unicode data loaded");
    render(&db, options)
}

/// Render the artifact selected by `options.mode` from an already-loaded
/// database.
pub fn render(db: &UnicodeData, options: &GenerateOptions) -> Result<Vec<u8>, CliError> {
    let emitter: Box<dyn TableEmitter> = match options.mode {
        Mode::Dump => return Ok(dump(db).into_bytes()),
        Mode::Header => Box::new(CppHeader::new(options.include_guard.clone())?),
        Mode::Source => Box::new(CppSource::new(&options.header_file)),
        Mode::Rust => Box::new(RustSource::new()),
    };
    let classifier = Classifier::for_database(db).map_err(BuildError::from)?;
    let table = build_table(db, &classifier)?;
    Ok(emitter.render(&table, db)?)
}

/// One line per database entry: `U+0041 LATIN CAPITAL LETTER A (Lu)`.
/// `First>`/`Last>` blocks print as a single `U+3400..U+4DBF` line.
pub fn dump(db: &UnicodeData) -> String {
    let mut out = String::new();
    for (range, record) in db.iter() {
        let (first, last) = range.into_inner();
        let _ = write!(out, "U+{first:04X}");
        if last != first {
            let _ = write!(out, "..U+{last:04X}");
        }
        let _ = writeln!(out, " {} ({})", record.name, record.category.abbr());
    }
    out
}

/// Write `bytes` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}
