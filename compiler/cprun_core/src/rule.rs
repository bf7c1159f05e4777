//! Lexer grammar rules and their 2-bit encoding.
//!
//! The codes are chosen so that a single mask answers "may this code point
//! continue an identifier": `IdentifierStart` (`0b01`) is a bit subset of
//! `IdentifierPart` (`0b11`), and both have [`IDENTIFIER_PART_MASK`] set,
//! while `Whitespace` (`0b00`) does not. A lexer reading raw codes can test
//! `code & IDENTIFIER_PART_MASK != 0` without decoding the enum.

use std::fmt;

use crate::layout::MAX_RULE;

/// The role a code point plays in the lexer grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GrammarRule {
    /// `WhiteSpace`: separates tokens.
    Whitespace = 0b00,
    /// `IdentifierStart`: may begin (and continue) an identifier.
    IdentifierStart = 0b01,
    /// `IdentifierPart`: may continue an identifier but not begin one.
    IdentifierPart = 0b11,
}

/// Set in the code of every rule that may appear after the first character
/// of an identifier.
pub const IDENTIFIER_PART_MASK: u8 = 0b01;

const _: () = {
    let start = GrammarRule::IdentifierStart as u8;
    let part = GrammarRule::IdentifierPart as u8;
    let space = GrammarRule::Whitespace as u8;
    assert!(start & !part == 0, "identifier_start must be a bit subset of identifier_part");
    assert!(start != part);
    assert!(start & IDENTIFIER_PART_MASK != 0);
    assert!(part & IDENTIFIER_PART_MASK != 0);
    assert!(space & IDENTIFIER_PART_MASK == 0);
    assert!(start <= MAX_RULE && part <= MAX_RULE && space <= MAX_RULE);
};

impl GrammarRule {
    pub const ALL: [GrammarRule; 3] = [
        GrammarRule::Whitespace,
        GrammarRule::IdentifierStart,
        GrammarRule::IdentifierPart,
    ];

    /// The value stored in a record's rule field.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a rule field. `0b10` is not a rule.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(GrammarRule::Whitespace),
            0b01 => Some(GrammarRule::IdentifierStart),
            0b11 => Some(GrammarRule::IdentifierPart),
            _ => None,
        }
    }

    /// True for every rule that may continue an identifier.
    #[inline]
    pub const fn continues_identifier(self) -> bool {
        self.code() & IDENTIFIER_PART_MASK != 0
    }

    /// The snake-case name used in generated tables.
    pub const fn name(self) -> &'static str {
        match self {
            GrammarRule::Whitespace => "whitespace",
            GrammarRule::IdentifierStart => "identifier_start",
            GrammarRule::IdentifierPart => "identifier_part",
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
