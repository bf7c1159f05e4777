//! Unicode general category values.
//!
//! See <https://www.unicode.org/reports/tr44/#General_Category_Values>.

use std::fmt;

/// The most general classification of a code point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    /// `Lu`: an uppercase letter.
    UppercaseLetter,
    /// `Ll`: a lowercase letter.
    LowercaseLetter,
    /// `Lt`: a digraphic character, with first part uppercase.
    TitlecaseLetter,
    /// `Lm`: a modifier letter.
    ModifierLetter,
    /// `Lo`: other letters, including syllables and ideographs.
    OtherLetter,
    /// `Mn`: a non-spacing combining mark (zero advance width).
    NonspacingMark,
    /// `Mc`: a spacing combining mark (positive advance width).
    SpacingMark,
    /// `Me`: an enclosing combining mark.
    EnclosingMark,
    /// `Nd`: a decimal digit.
    DecimalNumber,
    /// `Nl`: a letter-like numeric character.
    LetterNumber,
    /// `No`: a numeric character of other type.
    OtherNumber,
    /// `Pc`: a connecting punctuation mark, like a tie.
    ConnectorPunctuation,
    /// `Pd`: a dash or hyphen punctuation mark.
    DashPunctuation,
    /// `Ps`: an opening punctuation mark (of a pair).
    OpenPunctuation,
    /// `Pe`: a closing punctuation mark (of a pair).
    ClosePunctuation,
    /// `Pi`: an initial quotation mark.
    InitialPunctuation,
    /// `Pf`: a final quotation mark.
    FinalPunctuation,
    /// `Po`: a punctuation mark of other type.
    OtherPunctuation,
    /// `Sm`: a symbol of mathematical use.
    MathSymbol,
    /// `Sc`: a currency sign.
    CurrencySymbol,
    /// `Sk`: a non-letter-like modifier symbol.
    ModifierSymbol,
    /// `So`: a symbol of other type.
    OtherSymbol,
    /// `Zs`: a space character (of various non-zero widths).
    SpaceSeparator,
    /// `Zl`: U+2028 LINE SEPARATOR only.
    LineSeparator,
    /// `Zp`: U+2029 PARAGRAPH SEPARATOR only.
    ParagraphSeparator,
    /// `Cc`: a C0 or C1 control code.
    Control,
    /// `Cf`: a format control character.
    Format,
    /// `Cs`: a surrogate code point.
    Surrogate,
    /// `Co`: a private-use character.
    PrivateUse,
    /// `Cn`: a reserved unassigned code point or a noncharacter.
    Unassigned,
}

impl GeneralCategory {
    /// Every category, in the order listed by UAX #44.
    pub const ALL: [GeneralCategory; 30] = [
        GeneralCategory::UppercaseLetter,
        GeneralCategory::LowercaseLetter,
        GeneralCategory::TitlecaseLetter,
        GeneralCategory::ModifierLetter,
        GeneralCategory::OtherLetter,
        GeneralCategory::NonspacingMark,
        GeneralCategory::SpacingMark,
        GeneralCategory::EnclosingMark,
        GeneralCategory::DecimalNumber,
        GeneralCategory::LetterNumber,
        GeneralCategory::OtherNumber,
        GeneralCategory::ConnectorPunctuation,
        GeneralCategory::DashPunctuation,
        GeneralCategory::OpenPunctuation,
        GeneralCategory::ClosePunctuation,
        GeneralCategory::InitialPunctuation,
        GeneralCategory::FinalPunctuation,
        GeneralCategory::OtherPunctuation,
        GeneralCategory::MathSymbol,
        GeneralCategory::CurrencySymbol,
        GeneralCategory::ModifierSymbol,
        GeneralCategory::OtherSymbol,
        GeneralCategory::SpaceSeparator,
        GeneralCategory::LineSeparator,
        GeneralCategory::ParagraphSeparator,
        GeneralCategory::Control,
        GeneralCategory::Format,
        GeneralCategory::Surrogate,
        GeneralCategory::PrivateUse,
        GeneralCategory::Unassigned,
    ];

    /// Decode the abbreviated property value alias used in field 2 of
    /// `UnicodeData.txt` (`"Lu"`, `"Zs"`, ...).
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        let category = match abbr {
            "Lu" => GeneralCategory::UppercaseLetter,
            "Ll" => GeneralCategory::LowercaseLetter,
            "Lt" => GeneralCategory::TitlecaseLetter,
            "Lm" => GeneralCategory::ModifierLetter,
            "Lo" => GeneralCategory::OtherLetter,
            "Mn" => GeneralCategory::NonspacingMark,
            "Mc" => GeneralCategory::SpacingMark,
            "Me" => GeneralCategory::EnclosingMark,
            "Nd" => GeneralCategory::DecimalNumber,
            "Nl" => GeneralCategory::LetterNumber,
            "No" => GeneralCategory::OtherNumber,
            "Pc" => GeneralCategory::ConnectorPunctuation,
            "Pd" => GeneralCategory::DashPunctuation,
            "Ps" => GeneralCategory::OpenPunctuation,
            "Pe" => GeneralCategory::ClosePunctuation,
            "Pi" => GeneralCategory::InitialPunctuation,
            "Pf" => GeneralCategory::FinalPunctuation,
            "Po" => GeneralCategory::OtherPunctuation,
            "Sm" => GeneralCategory::MathSymbol,
            "Sc" => GeneralCategory::CurrencySymbol,
            "Sk" => GeneralCategory::ModifierSymbol,
            "So" => GeneralCategory::OtherSymbol,
            "Zs" => GeneralCategory::SpaceSeparator,
            "Zl" => GeneralCategory::LineSeparator,
            "Zp" => GeneralCategory::ParagraphSeparator,
            "Cc" => GeneralCategory::Control,
            "Cf" => GeneralCategory::Format,
            "Cs" => GeneralCategory::Surrogate,
            "Co" => GeneralCategory::PrivateUse,
            "Cn" => GeneralCategory::Unassigned,
            _ => return None,
        };
        Some(category)
    }

    /// The abbreviated alias (`"Lu"`).
    pub const fn abbr(self) -> &'static str {
        match self {
            GeneralCategory::UppercaseLetter => "Lu",
            GeneralCategory::LowercaseLetter => "Ll",
            GeneralCategory::TitlecaseLetter => "Lt",
            GeneralCategory::ModifierLetter => "Lm",
            GeneralCategory::OtherLetter => "Lo",
            GeneralCategory::NonspacingMark => "Mn",
            GeneralCategory::SpacingMark => "Mc",
            GeneralCategory::EnclosingMark => "Me",
            GeneralCategory::DecimalNumber => "Nd",
            GeneralCategory::LetterNumber => "Nl",
            GeneralCategory::OtherNumber => "No",
            GeneralCategory::ConnectorPunctuation => "Pc",
            GeneralCategory::DashPunctuation => "Pd",
            GeneralCategory::OpenPunctuation => "Ps",
            GeneralCategory::ClosePunctuation => "Pe",
            GeneralCategory::InitialPunctuation => "Pi",
            GeneralCategory::FinalPunctuation => "Pf",
            GeneralCategory::OtherPunctuation => "Po",
            GeneralCategory::MathSymbol => "Sm",
            GeneralCategory::CurrencySymbol => "Sc",
            GeneralCategory::ModifierSymbol => "Sk",
            GeneralCategory::OtherSymbol => "So",
            GeneralCategory::SpaceSeparator => "Zs",
            GeneralCategory::LineSeparator => "Zl",
            GeneralCategory::ParagraphSeparator => "Zp",
            GeneralCategory::Control => "Cc",
            GeneralCategory::Format => "Cf",
            GeneralCategory::Surrogate => "Cs",
            GeneralCategory::PrivateUse => "Co",
            GeneralCategory::Unassigned => "Cn",
        }
    }

    /// The long property value alias (`"Uppercase_Letter"`).
    pub const fn name(self) -> &'static str {
        match self {
            GeneralCategory::UppercaseLetter => "Uppercase_Letter",
            GeneralCategory::LowercaseLetter => "Lowercase_Letter",
            GeneralCategory::TitlecaseLetter => "Titlecase_Letter",
            GeneralCategory::ModifierLetter => "Modifier_Letter",
            GeneralCategory::OtherLetter => "Other_Letter",
            GeneralCategory::NonspacingMark => "Nonspacing_Mark",
            GeneralCategory::SpacingMark => "Spacing_Mark",
            GeneralCategory::EnclosingMark => "Enclosing_Mark",
            GeneralCategory::DecimalNumber => "Decimal_Number",
            GeneralCategory::LetterNumber => "Letter_Number",
            GeneralCategory::OtherNumber => "Other_Number",
            GeneralCategory::ConnectorPunctuation => "Connector_Punctuation",
            GeneralCategory::DashPunctuation => "Dash_Punctuation",
            GeneralCategory::OpenPunctuation => "Open_Punctuation",
            GeneralCategory::ClosePunctuation => "Close_Punctuation",
            GeneralCategory::InitialPunctuation => "Initial_Punctuation",
            GeneralCategory::FinalPunctuation => "Final_Punctuation",
            GeneralCategory::OtherPunctuation => "Other_Punctuation",
            GeneralCategory::MathSymbol => "Math_Symbol",
            GeneralCategory::CurrencySymbol => "Currency_Symbol",
            GeneralCategory::ModifierSymbol => "Modifier_Symbol",
            GeneralCategory::OtherSymbol => "Other_Symbol",
            GeneralCategory::SpaceSeparator => "Space_Separator",
            GeneralCategory::LineSeparator => "Line_Separator",
            GeneralCategory::ParagraphSeparator => "Paragraph_Separator",
            GeneralCategory::Control => "Control",
            GeneralCategory::Format => "Format",
            GeneralCategory::Surrogate => "Surrogate",
            GeneralCategory::PrivateUse => "Private_Use",
            GeneralCategory::Unassigned => "Unassigned",
        }
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.abbr())
    }
}
