use super::*;

#[test]
fn codes_round_trip() {
    for rule in GrammarRule::ALL {
        assert_eq!(GrammarRule::from_code(rule.code()), Some(rule));
    }
    assert_eq!(GrammarRule::from_code(0b10), None);
    assert_eq!(GrammarRule::from_code(0b100), None);
}

#[test]
fn identifier_start_is_a_bit_subset_of_identifier_part() {
    let start = GrammarRule::IdentifierStart.code();
    let part = GrammarRule::IdentifierPart.code();
    assert_eq!(start & part, start);
    assert_ne!(start, part);
}

#[test]
fn identifier_part_mask_selects_identifier_rules() {
    assert!(GrammarRule::IdentifierStart.continues_identifier());
    assert!(GrammarRule::IdentifierPart.continues_identifier());
    assert!(!GrammarRule::Whitespace.continues_identifier());
}

#[test]
fn every_code_fits_the_rule_field() {
    for rule in GrammarRule::ALL {
        assert!(rule.code() <= MAX_RULE, "{rule} does not fit");
    }
}

#[test]
fn names_are_snake_case() {
    assert_eq!(GrammarRule::Whitespace.to_string(), "whitespace");
    assert_eq!(GrammarRule::IdentifierStart.to_string(), "identifier_start");
    assert_eq!(GrammarRule::IdentifierPart.to_string(), "identifier_part");
}
