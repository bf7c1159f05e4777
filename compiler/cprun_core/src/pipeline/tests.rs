use cprun_ucd::{CodePointRecord, GeneralCategory, UnicodeData};
use pretty_assertions::assert_eq;

use super::*;
use crate::{Override, RunRecord, STANDARD_OVERRIDES};

fn record(start: u32, length: u16, rule: GrammarRule) -> RunRecord {
    RunRecord::new(start, length, rule).unwrap()
}

fn define(db: &mut UnicodeData, code_point: u32, category: GeneralCategory) {
    db.insert(code_point, CodePointRecord::new(format!("CHAR {code_point:04X}"), category));
}

/// The ASCII range classified as `UnicodeData.txt` does, plus the
/// non-ASCII override targets with their native categories.
fn ascii_database() -> UnicodeData {
    let mut db = UnicodeData::new();
    for code_point in 0x00..=0x7F_u32 {
        let category = match code_point {
            0x00..=0x1F | 0x7F => GeneralCategory::Control,
            0x20 => GeneralCategory::SpaceSeparator,
            0x24 => GeneralCategory::CurrencySymbol,
            0x28 | 0x5B | 0x7B => GeneralCategory::OpenPunctuation,
            0x29 | 0x5D | 0x7D => GeneralCategory::ClosePunctuation,
            0x2B | 0x3C..=0x3E | 0x7C | 0x7E => GeneralCategory::MathSymbol,
            0x2D => GeneralCategory::DashPunctuation,
            0x30..=0x39 => GeneralCategory::DecimalNumber,
            0x41..=0x5A => GeneralCategory::UppercaseLetter,
            0x5E | 0x60 => GeneralCategory::ModifierSymbol,
            0x5F => GeneralCategory::ConnectorPunctuation,
            0x61..=0x7A => GeneralCategory::LowercaseLetter,
            _ => GeneralCategory::OtherPunctuation,
        };
        define(&mut db, code_point, category);
    }
    define(&mut db, 0xA0, GeneralCategory::SpaceSeparator);
    define(&mut db, 0x200C, GeneralCategory::Format);
    define(&mut db, 0x200D, GeneralCategory::Format);
    define(&mut db, 0xFEFF, GeneralCategory::Format);
    db
}

#[test]
fn uppercase_letters_without_overrides_form_one_run() {
    let mut db = UnicodeData::new();
    for code_point in 0x41..=0x5A {
        define(&mut db, code_point, GeneralCategory::UppercaseLetter);
    }
    let classifier = Classifier::with_overrides(&[]).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    assert_eq!(table.runs(), &[record(0x41, 26, GrammarRule::IdentifierStart)]);
}

#[test]
fn dollar_override_stands_alone() {
    let mut db = UnicodeData::new();
    define(&mut db, 0x23, GeneralCategory::OtherPunctuation);
    define(&mut db, 0x24, GeneralCategory::CurrencySymbol);
    define(&mut db, 0x25, GeneralCategory::OtherPunctuation);
    let dollar = [Override::new(
        0x24,
        GeneralCategory::OtherLetter,
        GrammarRule::IdentifierStart,
    )];
    let classifier = Classifier::with_overrides(&dollar).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    assert_eq!(table.runs(), &[record(0x24, 1, GrammarRule::IdentifierStart)]);
}

#[test]
fn long_mark_block_splits_at_the_cap() {
    let mut db = UnicodeData::new();
    db.insert_range(
        0x1_0000..=0x1_0000 + 599,
        CodePointRecord::new("<Marks>", GeneralCategory::NonspacingMark),
    )
    .unwrap();
    let classifier = Classifier::with_overrides(&[]).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    assert_eq!(
        table.runs(),
        &[
            record(0x1_0000, 511, GrammarRule::IdentifierPart),
            record(0x1_0000 + 511, 89, GrammarRule::IdentifierPart),
        ]
    );
}

#[test]
fn joiners_continue_identifiers() {
    let db = ascii_database();
    let classifier = Classifier::for_database(&db).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    assert_eq!(table.lookup(0x200C), Some(GrammarRule::IdentifierPart));
    assert_eq!(table.lookup(0x200D), Some(GrammarRule::IdentifierPart));
    assert!(table
        .iter()
        .any(|run| run.rule() == GrammarRule::IdentifierPart && run.contains(0x200C) && run.contains(0x200D)));
}

#[test]
fn ascii_table_matches_expected_runs() {
    let db = ascii_database();
    let classifier = Classifier::for_database(&db).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    assert_eq!(
        table.runs(),
        &[
            record(0x09, 5, GrammarRule::Whitespace),
            record(0x20, 1, GrammarRule::Whitespace),
            record(0x24, 1, GrammarRule::IdentifierStart),
            record(0x30, 10, GrammarRule::IdentifierPart),
            record(0x41, 26, GrammarRule::IdentifierStart),
            record(0x5F, 1, GrammarRule::IdentifierStart),
            record(0x61, 26, GrammarRule::IdentifierStart),
            record(0xA0, 1, GrammarRule::Whitespace),
            record(0x200C, 2, GrammarRule::IdentifierPart),
            record(0xFEFF, 1, GrammarRule::Whitespace),
        ]
    );
}

#[test]
fn standard_overrides_reach_the_table() {
    let db = ascii_database();
    let classifier = Classifier::for_database(&db).unwrap();
    let table = build_table(&db, &classifier).unwrap();
    for entry in &STANDARD_OVERRIDES {
        assert_eq!(
            table.lookup(entry.code_point),
            Some(entry.rule),
            "U+{:04X}",
            entry.code_point
        );
    }
}

#[test]
fn rebuilding_gives_identical_tables() {
    let db = ascii_database();
    let classifier = Classifier::for_database(&db).unwrap();
    let first = build_table(&db, &classifier).unwrap();
    let second = build_table(&db, &classifier).unwrap();
    assert_eq!(first.packed(), second.packed());
}

#[test]
fn build_errors_are_transparent() {
    let err = BuildError::from(EncodeError::EmptyRun { start: 0x41 });
    assert_eq!(err.to_string(), "run at U+0041 is empty");
}
