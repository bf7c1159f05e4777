//! General category to grammar rule classification.
//!
//! ECMAScript-style identifier and whitespace rules are mostly defined by
//! general category (`UnicodeLetter`, `UnicodeCombiningMark`, ...), but a
//! handful of code points play a role their category does not imply: tab
//! and friends are whitespace although they are `Cc`, `$` and `_` may start
//! an identifier, ZWNJ/ZWJ may continue one. Those are listed in
//! [`STANDARD_OVERRIDES`], which substitutes a category that resolves to the
//! desired rule before the category table is consulted.

use cprun_ucd::{GeneralCategory, UnicodeDatabase};
use thiserror::Error;

use crate::layout::MAX_CODE_POINT;
use crate::GrammarRule;

/// A per-code-point category substitution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Override {
    pub code_point: u32,
    /// The category used in place of the database's.
    pub category: GeneralCategory,
    /// The rule `category` is expected to produce; checked when a
    /// [`Classifier`] is built.
    pub rule: GrammarRule,
}

impl Override {
    pub const fn new(code_point: u32, category: GeneralCategory, rule: GrammarRule) -> Self {
        Override {
            code_point,
            category,
            rule,
        }
    }
}

const fn whitespace(code_point: u32) -> Override {
    Override::new(
        code_point,
        GeneralCategory::SpaceSeparator,
        GrammarRule::Whitespace,
    )
}

const fn identifier_start(code_point: u32) -> Override {
    Override::new(
        code_point,
        GeneralCategory::OtherLetter,
        GrammarRule::IdentifierStart,
    )
}

const fn identifier_part(code_point: u32) -> Override {
    Override::new(
        code_point,
        GeneralCategory::SpacingMark,
        GrammarRule::IdentifierPart,
    )
}

/// Code points whose grammar role differs from their category's.
/// Sorted by code point.
pub static STANDARD_OVERRIDES: [Override; 12] = [
    whitespace(0x0009),       // CHARACTER TABULATION
    whitespace(0x000A),       // LINE FEED
    whitespace(0x000B),       // LINE TABULATION
    whitespace(0x000C),       // FORM FEED
    whitespace(0x000D),       // CARRIAGE RETURN
    whitespace(0x0020),       // SPACE
    identifier_start(0x0024), // DOLLAR SIGN
    identifier_start(0x005F), // LOW LINE
    whitespace(0x00A0),       // NO-BREAK SPACE
    identifier_part(0x200C),  // ZERO WIDTH NON-JOINER
    identifier_part(0x200D),  // ZERO WIDTH JOINER
    whitespace(0xFEFF),       // ZERO WIDTH NO-BREAK SPACE
];

/// The rule a general category maps to, if any.
pub const fn rule_for_category(category: GeneralCategory) -> Option<GrammarRule> {
    match category {
        GeneralCategory::SpaceSeparator => Some(GrammarRule::Whitespace),
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter
        | GeneralCategory::LetterNumber => Some(GrammarRule::IdentifierStart),
        GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::DecimalNumber
        | GeneralCategory::ConnectorPunctuation => Some(GrammarRule::IdentifierPart),
        _ => None,
    }
}

/// An override table that cannot be used as given.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("override for U+{code_point:04X} is beyond U+{max:04X}", max = MAX_CODE_POINT)]
    OverrideOutOfRange { code_point: u32 },
    #[error("override for U+{code_point:04X} follows U+{previous:04X}; overrides must be unique and ascending")]
    OverridesOutOfOrder { previous: u32, code_point: u32 },
    #[error(
        "override for U+{code_point:04X} substitutes {category}, which maps to {} instead of {expected}",
        describe(.found)
    )]
    OverrideMismatch {
        code_point: u32,
        category: GeneralCategory,
        expected: GrammarRule,
        found: Option<GrammarRule>,
    },
    #[error("override target U+{code_point:04X} ({expected}) is not defined by the Unicode database")]
    MissingCodePoint {
        code_point: u32,
        expected: GrammarRule,
    },
}

fn describe(rule: &Option<GrammarRule>) -> &'static str {
    rule.map_or("no rule", GrammarRule::name)
}

/// Maps `(code point, category)` to a grammar rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classifier {
    /// Sorted by code point, unique.
    overrides: Vec<Override>,
}

impl Classifier {
    /// A classifier using [`STANDARD_OVERRIDES`].
    pub fn standard() -> Result<Self, ClassifierError> {
        Self::with_overrides(&STANDARD_OVERRIDES)
    }

    /// A classifier using [`STANDARD_OVERRIDES`], checked against `db`:
    /// every overridden code point must be assigned.
    pub fn for_database<D: UnicodeDatabase + ?Sized>(db: &D) -> Result<Self, ClassifierError> {
        let classifier = Self::standard()?;
        classifier.check_database(db)?;
        Ok(classifier)
    }

    /// A classifier using a custom override table (possibly empty).
    ///
    /// Every entry's category must map to the entry's rule, and entries
    /// must be in strictly ascending code point order.
    pub fn with_overrides(overrides: &[Override]) -> Result<Self, ClassifierError> {
        let mut previous: Option<u32> = None;
        for entry in overrides {
            let code_point = entry.code_point;
            if code_point > MAX_CODE_POINT {
                return Err(ClassifierError::OverrideOutOfRange { code_point });
            }
            if let Some(previous) = previous {
                if code_point <= previous {
                    return Err(ClassifierError::OverridesOutOfOrder {
                        previous,
                        code_point,
                    });
                }
            }
            previous = Some(code_point);

            let found = rule_for_category(entry.category);
            if found != Some(entry.rule) {
                return Err(ClassifierError::OverrideMismatch {
                    code_point,
                    category: entry.category,
                    expected: entry.rule,
                    found,
                });
            }
        }
        Ok(Classifier {
            overrides: overrides.to_vec(),
        })
    }

    /// Fail if any overridden code point is unassigned in `db`.
    pub fn check_database<D: UnicodeDatabase + ?Sized>(&self, db: &D) -> Result<(), ClassifierError> {
        match self
            .overrides
            .iter()
            .find(|entry| db.lookup(entry.code_point).is_none())
        {
            Some(entry) => Err(ClassifierError::MissingCodePoint {
                code_point: entry.code_point,
                expected: entry.rule,
            }),
            None => Ok(()),
        }
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// The override for `code_point`, if there is one.
    pub fn override_for(&self, code_point: u32) -> Option<&Override> {
        self.overrides
            .binary_search_by_key(&code_point, |entry| entry.code_point)
            .ok()
            .map(|idx| &self.overrides[idx])
    }

    /// Classify one code point. `category` is the database's category, or
    /// `None` if the code point is unassigned.
    pub fn classify(
        &self,
        code_point: u32,
        category: Option<GeneralCategory>,
    ) -> Option<GrammarRule> {
        let category = match self.override_for(code_point) {
            Some(entry) => {
                tracing::trace!(
                    code_point = format_args!("U+{code_point:04X}"),
                    from = ?category,
                    to = ?entry.category,
                    "category overridden"
                );
                Some(entry.category)
            }
            None => category,
        };
        category.and_then(rule_for_category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code — panics provide clear failure messages")]
mod tests;
