//! Command-line options.

use std::path::PathBuf;

use cprun_emit::{DEFAULT_HEADER_FILE, DEFAULT_INCLUDE_GUARD};

use crate::CliError;

pub const DEFAULT_UNICODE_DATA: &str = "./UnicodeData.txt";

/// What to generate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The C++ header declaring the table (`--hpp`).
    #[default]
    Header,
    /// The C++ source file defining the table (`-c`, `--cpp`).
    Source,
    /// A Rust module holding the packed table (`--rust`).
    Rust,
    /// The decoded database, one entry per line (`-d`, `--dump`).
    Dump,
}

/// Settings for one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub unicode_data: PathBuf,
    /// Header named by the C++ source's `#include`.
    pub header_file: PathBuf,
    pub include_guard: String,
    pub mode: Mode,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            unicode_data: PathBuf::from(DEFAULT_UNICODE_DATA),
            header_file: PathBuf::from(DEFAULT_HEADER_FILE),
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            mode: Mode::default(),
            output: None,
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(GenerateOptions),
    Help,
    Version,
}

/// Parse the arguments that follow the program name.
///
/// Options taking a value accept both `--flag value` and `--flag=value`.
/// At most one mode flag may be given, though it may be repeated.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut options = GenerateOptions::default();
    let mut mode_flag: Option<String> = None;

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg, None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-u" | "--unicode-data" => {
                options.unicode_data = PathBuf::from(value(&flag, inline, &mut args)?);
            }
            "-f" | "--header-file" => {
                options.header_file = PathBuf::from(value(&flag, inline, &mut args)?);
            }
            "--include-guard" => {
                options.include_guard = value(&flag, inline, &mut args)?;
            }
            "-o" | "--output" => {
                options.output = Some(PathBuf::from(value(&flag, inline, &mut args)?));
            }
            "--hpp" | "-c" | "--cpp" | "--rust" | "-d" | "--dump" => {
                if inline.is_some() {
                    return Err(CliError::UnexpectedValue(flag));
                }
                let mode = mode_for(&flag);
                if let Some(first) = &mode_flag {
                    if mode != options.mode {
                        return Err(CliError::ConflictingModes {
                            first: first.clone(),
                            second: flag,
                        });
                    }
                }
                options.mode = mode;
                mode_flag = Some(flag);
            }
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownOption(flag));
            }
            _ => return Err(CliError::UnexpectedArgument(flag)),
        }
    }

    Ok(Command::Generate(options))
}

fn mode_for(flag: &str) -> Mode {
    match flag {
        "-c" | "--cpp" => Mode::Source,
        "--rust" => Mode::Rust,
        "-d" | "--dump" => Mode::Dump,
        _ => Mode::Header,
    }
}

/// The value of `flag`: the inline `=value` if present, otherwise the next
/// argument.
fn value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, CliError> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}
