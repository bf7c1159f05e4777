//! Rust module generator.
//!
//! The generated module has no dependencies: it declares its own
//! `GrammarRule` enum, the field widths, and the table as packed words so
//! it can be dropped into a lexer crate with `include!` or as a module.

use std::io::Write;

use cprun_core::{
    GrammarRule, RunTable, UnicodeDatabase, CODE_POINT_BITS, IDENTIFIER_PART_MASK, RULE_BITS,
    RUN_LENGTH_BITS,
};

use crate::{name_of, EmitError, PascalCase, RuleNaming, TableEmitter};

const ARRAY_NAME: &str = "CODE_POINT_RUNS";

/// Emits a Rust module holding the packed run table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RustSource<N = PascalCase> {
    naming: N,
}

impl RustSource {
    pub fn new() -> Self {
        RustSource { naming: PascalCase }
    }
}

impl Default for RustSource {
    fn default() -> Self {
        RustSource::new()
    }
}

impl<N: RuleNaming> RustSource<N> {
    /// Spell the enum variants and comments with `naming`.
    pub fn with_naming<M: RuleNaming>(self, naming: M) -> RustSource<M> {
        RustSource { naming }
    }
}

impl<N: RuleNaming> TableEmitter for RustSource<N> {
    fn emit(
        &self,
        table: &RunTable,
        db: &dyn UnicodeDatabase,
        out: &mut dyn Write,
    ) -> Result<(), EmitError> {
        let naming = &self.naming;

        writeln!(out, "// @generated by cprunc. Do not edit.")?;
        writeln!(out)?;
        writeln!(out, "#[derive(Copy, Clone, Debug, PartialEq, Eq)]")?;
        writeln!(out, "#[repr(u8)]")?;
        writeln!(out, "pub enum {} {{", naming.type_name())?;
        for rule in GrammarRule::ALL {
            writeln!(out, "    {} = 0b{:02b},", naming.variant(rule), rule.code())?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "pub const CODE_POINT_BITS: u32 = {CODE_POINT_BITS};")?;
        writeln!(out, "pub const RUN_LENGTH_BITS: u32 = {RUN_LENGTH_BITS};")?;
        writeln!(out, "pub const RULE_BITS: u32 = {RULE_BITS};")?;
        writeln!(
            out,
            "pub const IDENTIFIER_PART_MASK: u8 = 0b{IDENTIFIER_PART_MASK:02b};"
        )?;
        writeln!(out)?;

        writeln!(
            out,
            "/// Code point in bits 0..{CODE_POINT_BITS}, length in the next {RUN_LENGTH_BITS}, rule in the top {RULE_BITS}."
        )?;
        writeln!(out, "pub static {ARRAY_NAME}: [u32; {}] = [", table.len())?;
        for run in table {
            writeln!(
                out,
                "    0x{:08X}, // U+{:04X} +{} {} ({})",
                run.pack(),
                run.start(),
                run.length(),
                name_of(db, run.start()),
                naming.variant(run.rule())
            )?;
        }
        writeln!(out, "];")?;
        Ok(())
    }
}
