use pretty_assertions::assert_eq;

use super::*;

fn record(start: u32, length: u16, rule: GrammarRule) -> RunRecord {
    RunRecord::new(start, length, rule).unwrap()
}

fn table(runs: Vec<RunRecord>) -> RunTable {
    let longest = runs.iter().map(|run| run.length()).max().unwrap_or(0);
    RunTable::from_parts(runs, longest)
}

// === Lookup ===

#[test]
fn lookup_finds_the_containing_run() {
    let table = table(vec![
        record(0x20, 1, GrammarRule::Whitespace),
        record(0x41, 26, GrammarRule::IdentifierStart),
        record(0x300, 112, GrammarRule::IdentifierPart),
    ]);
    assert_eq!(table.lookup(0x20), Some(GrammarRule::Whitespace));
    assert_eq!(table.lookup(0x41), Some(GrammarRule::IdentifierStart));
    assert_eq!(table.lookup(0x5A), Some(GrammarRule::IdentifierStart));
    assert_eq!(table.lookup(0x36F), Some(GrammarRule::IdentifierPart));
}

#[test]
fn lookup_misses_gaps_and_ends() {
    let table = table(vec![
        record(0x20, 1, GrammarRule::Whitespace),
        record(0x41, 26, GrammarRule::IdentifierStart),
    ]);
    assert_eq!(table.lookup(0), None);
    assert_eq!(table.lookup(0x1F), None);
    assert_eq!(table.lookup(0x21), None);
    assert_eq!(table.lookup(0x40), None);
    assert_eq!(table.lookup(0x5B), None);
    assert_eq!(table.lookup(0x10_FFFF), None);
}

#[test]
fn empty_table_has_no_rules() {
    let table = RunTable::default();
    assert!(table.is_empty());
    assert_eq!(table.lookup(0x41), None);
    assert_eq!(table.validate(), Ok(()));
}

#[test]
fn packed_preserves_order() {
    let runs = vec![
        record(0x20, 1, GrammarRule::Whitespace),
        record(0x41, 26, GrammarRule::IdentifierStart),
    ];
    let expected: Vec<u32> = runs.iter().map(|run| run.pack()).collect();
    assert_eq!(table(runs).packed(), expected);
}

// === Validation ===

#[test]
fn adjacent_runs_with_different_rules_are_valid() {
    let table = table(vec![
        record(0x30, 10, GrammarRule::IdentifierPart),
        record(0x3A, 1, GrammarRule::IdentifierStart),
    ]);
    assert_eq!(table.validate(), Ok(()));
}

#[test]
fn split_at_the_cap_is_valid() {
    let table = table(vec![
        record(0, 511, GrammarRule::IdentifierStart),
        record(511, 3, GrammarRule::IdentifierStart),
    ]);
    assert_eq!(table.validate(), Ok(()));
}

#[test]
fn split_below_the_cap_is_rejected() {
    let table = table(vec![
        record(0x41, 10, GrammarRule::IdentifierStart),
        record(0x4B, 16, GrammarRule::IdentifierStart),
    ]);
    assert_eq!(
        table.validate(),
        Err(TableError::Unmerged {
            start: 0x4B,
            rule: GrammarRule::IdentifierStart
        })
    );
}

#[test]
fn overlapping_runs_are_rejected() {
    let table = table(vec![
        record(0x41, 10, GrammarRule::IdentifierStart),
        record(0x45, 1, GrammarRule::Whitespace),
    ]);
    assert_eq!(
        table.validate(),
        Err(TableError::Overlap {
            previous_end: 0x4A,
            start: 0x45
        })
    );
}

#[test]
fn same_rule_separated_by_a_gap_is_valid() {
    let table = table(vec![
        record(0x41, 26, GrammarRule::IdentifierStart),
        record(0x61, 26, GrammarRule::IdentifierStart),
    ]);
    assert_eq!(table.validate(), Ok(()));
}
