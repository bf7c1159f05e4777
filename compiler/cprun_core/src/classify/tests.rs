use cprun_ucd::{CodePointRecord, UnicodeData};
use pretty_assertions::assert_eq;

use super::*;

// === Category table ===

#[test]
fn letters_and_letter_numbers_start_identifiers() {
    for category in [
        GeneralCategory::UppercaseLetter,
        GeneralCategory::LowercaseLetter,
        GeneralCategory::TitlecaseLetter,
        GeneralCategory::ModifierLetter,
        GeneralCategory::OtherLetter,
        GeneralCategory::LetterNumber,
    ] {
        assert_eq!(
            rule_for_category(category),
            Some(GrammarRule::IdentifierStart),
            "{category}"
        );
    }
}

#[test]
fn marks_digits_and_connectors_continue_identifiers() {
    for category in [
        GeneralCategory::NonspacingMark,
        GeneralCategory::SpacingMark,
        GeneralCategory::DecimalNumber,
        GeneralCategory::ConnectorPunctuation,
    ] {
        assert_eq!(
            rule_for_category(category),
            Some(GrammarRule::IdentifierPart),
            "{category}"
        );
    }
}

#[test]
fn space_separator_is_whitespace() {
    assert_eq!(
        rule_for_category(GeneralCategory::SpaceSeparator),
        Some(GrammarRule::Whitespace)
    );
}

#[test]
fn every_other_category_has_no_rule() {
    let ruled = GeneralCategory::ALL
        .iter()
        .filter(|category| rule_for_category(**category).is_some())
        .count();
    assert_eq!(ruled, 11);
    for category in [
        GeneralCategory::EnclosingMark,
        GeneralCategory::OtherNumber,
        GeneralCategory::LineSeparator,
        GeneralCategory::ParagraphSeparator,
        GeneralCategory::Control,
        GeneralCategory::Format,
        GeneralCategory::CurrencySymbol,
        GeneralCategory::Unassigned,
    ] {
        assert_eq!(rule_for_category(category), None, "{category}");
    }
}

// === Override table ===

#[test]
fn standard_overrides_are_consistent() {
    let classifier = Classifier::standard().unwrap();
    assert_eq!(classifier.overrides(), &STANDARD_OVERRIDES[..]);
}

#[test]
fn standard_overrides_cover_the_required_code_points() {
    let expected: Vec<(u32, GrammarRule)> = vec![
        (0x0009, GrammarRule::Whitespace),
        (0x000A, GrammarRule::Whitespace),
        (0x000B, GrammarRule::Whitespace),
        (0x000C, GrammarRule::Whitespace),
        (0x000D, GrammarRule::Whitespace),
        (0x0020, GrammarRule::Whitespace),
        (0x0024, GrammarRule::IdentifierStart),
        (0x005F, GrammarRule::IdentifierStart),
        (0x00A0, GrammarRule::Whitespace),
        (0x200C, GrammarRule::IdentifierPart),
        (0x200D, GrammarRule::IdentifierPart),
        (0xFEFF, GrammarRule::Whitespace),
    ];
    let actual: Vec<(u32, GrammarRule)> = STANDARD_OVERRIDES
        .iter()
        .map(|entry| (entry.code_point, entry.rule))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn overrides_replace_the_database_category() {
    let classifier = Classifier::standard().unwrap();
    assert_eq!(
        classifier.classify(0x09, Some(GeneralCategory::Control)),
        Some(GrammarRule::Whitespace)
    );
    assert_eq!(
        classifier.classify(0x24, Some(GeneralCategory::CurrencySymbol)),
        Some(GrammarRule::IdentifierStart)
    );
    assert_eq!(
        classifier.classify(0x5F, Some(GeneralCategory::ConnectorPunctuation)),
        Some(GrammarRule::IdentifierStart)
    );
    assert_eq!(
        classifier.classify(0x200D, Some(GeneralCategory::Format)),
        Some(GrammarRule::IdentifierPart)
    );
    assert_eq!(
        classifier.classify(0xFEFF, Some(GeneralCategory::Format)),
        Some(GrammarRule::Whitespace)
    );
}

#[test]
fn overrides_apply_to_unassigned_code_points() {
    let classifier = Classifier::standard().unwrap();
    assert_eq!(
        classifier.classify(0x200C, None),
        Some(GrammarRule::IdentifierPart)
    );
}

#[test]
fn code_points_without_overrides_use_their_category() {
    let classifier = Classifier::standard().unwrap();
    assert_eq!(
        classifier.classify(0x41, Some(GeneralCategory::UppercaseLetter)),
        Some(GrammarRule::IdentifierStart)
    );
    assert_eq!(classifier.classify(0x23, Some(GeneralCategory::OtherPunctuation)), None);
    assert_eq!(classifier.classify(0x0378, None), None);
}

#[test]
fn empty_override_table_is_allowed() {
    let classifier = Classifier::with_overrides(&[]).unwrap();
    assert_eq!(classifier.classify(0x24, Some(GeneralCategory::CurrencySymbol)), None);
    assert_eq!(classifier.override_for(0x24), None);
}

#[test]
fn override_resolving_to_the_wrong_rule_is_rejected() {
    let bad = [Override::new(
        0x24,
        GeneralCategory::CurrencySymbol,
        GrammarRule::IdentifierStart,
    )];
    assert_eq!(
        Classifier::with_overrides(&bad),
        Err(ClassifierError::OverrideMismatch {
            code_point: 0x24,
            category: GeneralCategory::CurrencySymbol,
            expected: GrammarRule::IdentifierStart,
            found: None,
        })
    );
}

#[test]
fn mismatch_message_names_both_rules() {
    let bad = [Override::new(
        0x24,
        GeneralCategory::DecimalNumber,
        GrammarRule::IdentifierStart,
    )];
    let err = Classifier::with_overrides(&bad).unwrap_err();
    assert_eq!(
        err.to_string(),
        "override for U+0024 substitutes Decimal_Number (Nd), which maps to identifier_part instead of identifier_start"
    );
}

#[test]
fn unsorted_or_duplicate_overrides_are_rejected() {
    let unsorted = [
        Override::new(0x5F, GeneralCategory::OtherLetter, GrammarRule::IdentifierStart),
        Override::new(0x24, GeneralCategory::OtherLetter, GrammarRule::IdentifierStart),
    ];
    assert_eq!(
        Classifier::with_overrides(&unsorted),
        Err(ClassifierError::OverridesOutOfOrder {
            previous: 0x5F,
            code_point: 0x24
        })
    );

    let duplicate = [
        Override::new(0x24, GeneralCategory::OtherLetter, GrammarRule::IdentifierStart),
        Override::new(0x24, GeneralCategory::OtherLetter, GrammarRule::IdentifierStart),
    ];
    assert!(matches!(
        Classifier::with_overrides(&duplicate),
        Err(ClassifierError::OverridesOutOfOrder { .. })
    ));
}

#[test]
fn override_beyond_the_code_space_is_rejected() {
    let bad = [Override::new(
        0x11_0000,
        GeneralCategory::OtherLetter,
        GrammarRule::IdentifierStart,
    )];
    assert_eq!(
        Classifier::with_overrides(&bad),
        Err(ClassifierError::OverrideOutOfRange {
            code_point: 0x11_0000
        })
    );
}

// === Database check ===

fn database_with_override_targets() -> UnicodeData {
    let mut db = UnicodeData::new();
    for entry in &STANDARD_OVERRIDES {
        db.insert(
            entry.code_point,
            CodePointRecord::new("SOME CHARACTER", GeneralCategory::Control),
        );
    }
    db
}

#[test]
fn database_defining_every_override_target_is_accepted() {
    let db = database_with_override_targets();
    assert!(Classifier::for_database(&db).is_ok());
}

#[test]
fn database_missing_an_override_target_is_rejected() {
    let mut db = UnicodeData::new();
    for entry in &STANDARD_OVERRIDES {
        if entry.code_point != 0x200C {
            db.insert(
                entry.code_point,
                CodePointRecord::new("SOME CHARACTER", GeneralCategory::Control),
            );
        }
    }
    assert_eq!(
        Classifier::for_database(&db),
        Err(ClassifierError::MissingCodePoint {
            code_point: 0x200C,
            expected: GrammarRule::IdentifierPart,
        })
    );
}
