//! `cprunc`: code point run table generator.
//!
//! Reads `UnicodeData.txt`, classifies every code point and writes the run
//! table as a C++ header, a C++ source file or a Rust module. The library
//! half holds argument parsing and generation so both can be tested without
//! spawning the binary.

mod generate;
mod options;

pub use generate::{dump, generate, render, run, write_output};
pub use options::{parse_args, Command, GenerateOptions, Mode, DEFAULT_UNICODE_DATA};

use std::io;
use std::path::PathBuf;
use std::sync::Once;

use cprun_core::BuildError;
use cprun_emit::EmitError;
use cprun_ucd::UcdError;
use thiserror::Error;

/// Every way a `cprunc` invocation can fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("option `{0}` does not take a value")]
    UnexpectedValue(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("`{second}` cannot be combined with `{first}`")]
    ConflictingModes { first: String, second: String },
    #[error(transparent)]
    Ucd(#[from] UcdError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(filter)
                .init();
        }
    });
}
