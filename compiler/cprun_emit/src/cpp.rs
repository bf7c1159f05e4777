//! C++ header and source generators.
//!
//! The header declares
//!
//! ```cpp
//! enum class grammar_rule { whitespace = 0, identifier_start = 1, identifier_part = 3 };
//! struct cprun {
//!   uint_least32_t code_point: 21;
//!   uint_least32_t length: 9;
//!   uint_least32_t rule: 2;
//! };
//! extern std::array<cprun, N> code_point_runs;
//! ```
//!
//! and the source file defines `code_point_runs`, sorted by code point so a
//! consumer can `std::lower_bound` into it.

use std::io::Write;
use std::path::{Path, PathBuf};

use cprun_core::{
    GrammarRule, RunTable, UnicodeDatabase, CODE_POINT_BITS, RULE_BITS, RUN_LENGTH_BITS,
};

use crate::{name_of, trailing_comma, EmitError, RuleNaming, SnakeCase, TableEmitter};

pub const DEFAULT_INCLUDE_GUARD: &str = "CPRUN_HPP";
pub const DEFAULT_HEADER_FILE: &str = "cprun.hpp";

const STRUCT_NAME: &str = "cprun";
const ARRAY_NAME: &str = "code_point_runs";

/// Emits the header that declares the run table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CppHeader<N = SnakeCase> {
    include_guard: String,
    naming: N,
}

impl CppHeader {
    /// A header guarded by `include_guard`, which must be a valid
    /// preprocessor identifier.
    pub fn new(include_guard: impl Into<String>) -> Result<Self, EmitError> {
        let include_guard = include_guard.into();
        if !is_identifier(&include_guard) {
            return Err(EmitError::InvalidIncludeGuard {
                guard: include_guard,
            });
        }
        Ok(CppHeader {
            include_guard,
            naming: SnakeCase,
        })
    }
}

impl<N: RuleNaming> CppHeader<N> {
    /// Spell the `enum class` and its members with `naming`.
    pub fn with_naming<M: RuleNaming>(self, naming: M) -> CppHeader<M> {
        CppHeader {
            include_guard: self.include_guard,
            naming,
        }
    }

    pub fn include_guard(&self) -> &str {
        &self.include_guard
    }
}

impl Default for CppHeader {
    fn default() -> Self {
        CppHeader {
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            naming: SnakeCase,
        }
    }
}

impl<N: RuleNaming> TableEmitter for CppHeader<N> {
    fn emit(
        &self,
        table: &RunTable,
        _db: &dyn UnicodeDatabase,
        out: &mut dyn Write,
    ) -> Result<(), EmitError> {
        let guard = &self.include_guard;
        let naming = &self.naming;

        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;
        writeln!(out, "#include <array>")?;
        writeln!(out, "#include <cstdint>")?;
        writeln!(out)?;

        writeln!(out, "enum class {} {{", naming.type_name())?;
        for (idx, rule) in GrammarRule::ALL.iter().enumerate() {
            let comma = trailing_comma(idx, GrammarRule::ALL.len());
            writeln!(out, "  {} = {}{comma}", naming.variant(*rule), rule.code())?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(out, "struct {STRUCT_NAME} {{")?;
        writeln!(out, "  uint_least32_t code_point: {CODE_POINT_BITS};")?;
        writeln!(out, "  uint_least32_t length: {RUN_LENGTH_BITS};")?;
        writeln!(out, "  uint_least32_t rule: {RULE_BITS};")?;
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(
            out,
            "extern std::array<{STRUCT_NAME}, {}> {ARRAY_NAME};",
            table.len()
        )?;
        writeln!(out)?;
        writeln!(out, "#endif // {guard}")?;
        Ok(())
    }
}

/// Emits the source file that defines the run table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CppSource<N = SnakeCase> {
    header_file: PathBuf,
    naming: N,
}

impl CppSource {
    /// A source file that includes `header_file`.
    pub fn new(header_file: impl Into<PathBuf>) -> Self {
        CppSource {
            header_file: header_file.into(),
            naming: SnakeCase,
        }
    }
}

impl<N: RuleNaming> CppSource<N> {
    /// Spell the rule names in row comments with `naming`.
    pub fn with_naming<M: RuleNaming>(self, naming: M) -> CppSource<M> {
        CppSource {
            header_file: self.header_file,
            naming,
        }
    }

    pub fn header_file(&self) -> &Path {
        &self.header_file
    }
}

impl Default for CppSource {
    fn default() -> Self {
        CppSource::new(DEFAULT_HEADER_FILE)
    }
}

impl<N: RuleNaming> TableEmitter for CppSource<N> {
    fn emit(
        &self,
        table: &RunTable,
        db: &dyn UnicodeDatabase,
        out: &mut dyn Write,
    ) -> Result<(), EmitError> {
        writeln!(out, "#include \"{}\"", self.header_file.display())?;
        writeln!(
            out,
            "std::array<{STRUCT_NAME}, {}> {ARRAY_NAME} = {{{{",
            table.len()
        )?;
        for run in table {
            writeln!(
                out,
                "  {run}, // {} ({})",
                name_of(db, run.start()),
                self.naming.variant(run.rule())
            )?;
        }
        writeln!(out, "}}}};")?;
        Ok(())
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
