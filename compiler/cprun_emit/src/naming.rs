//! Spelling of grammar rule identifiers in generated code.

use cprun_core::GrammarRule;

/// How a target language spells the rule enum and its members.
pub trait RuleNaming {
    /// The name of the enum type.
    fn type_name(&self) -> &'static str;

    /// The name of the member for `rule`.
    fn variant(&self, rule: GrammarRule) -> String;
}

/// `grammar_rule::identifier_start`, as in C++ standard library style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnakeCase;

impl RuleNaming for SnakeCase {
    fn type_name(&self) -> &'static str {
        "grammar_rule"
    }

    fn variant(&self, rule: GrammarRule) -> String {
        rule.name().to_string()
    }
}

/// `GrammarRule::IdentifierStart`, as in Rust.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PascalCase;

impl RuleNaming for PascalCase {
    fn type_name(&self) -> &'static str {
        "GrammarRule"
    }

    fn variant(&self, rule: GrammarRule) -> String {
        rule.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                    None => String::new(),
                }
            })
            .collect()
    }
}
