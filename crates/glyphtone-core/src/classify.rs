//! Character classification by code point range.
//!
//! Every range is a closed interval. The predicates accept any integer and do
//! no bounds checking; callers clamp to the Unicode range before converting.

use serde::{Deserialize, Serialize};

/// First and last code point of the Devanagari digit run (`०`..`९`).
pub const DEVANAGARI_DIGIT_ZERO: i64 = 0x0966;
const DEVANAGARI_DIGIT_NINE: i64 = 0x096F;

/// Bounds of the Devanagari block.
pub const DEVANAGARI_START: i64 = 0x0900;
const DEVANAGARI_END: i64 = 0x097F;

/// `a`..=`z`
pub const fn is_lower_latin(c: i64) -> bool {
    c >= 97 && c <= 122
}

/// `A`..=`Z`
pub const fn is_upper_latin(c: i64) -> bool {
    c >= 65 && c <= 90
}

/// ASCII digits `0`..=`9`.
pub const fn is_digit_a(c: i64) -> bool {
    c >= 48 && c <= 57
}

/// Devanagari digits `०`..=`९`.
pub const fn is_digit_b(c: i64) -> bool {
    c >= DEVANAGARI_DIGIT_ZERO && c <= DEVANAGARI_DIGIT_NINE
}

/// The whole Devanagari block, digits included.
pub const fn is_script_range_a(c: i64) -> bool {
    c >= DEVANAGARI_START && c <= DEVANAGARI_END
}

/// Character class used to pick a formula branch.
///
/// The Devanagari digit range sits inside the Devanagari block, so a code
/// point can belong to more than one class. Channel rule tables decide which
/// one wins; [`CharacterClass::of`] applies a single fixed order for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    LowercaseLatin,
    UppercaseLatin,
    /// ASCII `0`-`9`.
    DecimalDigitScriptA,
    /// Devanagari `०`-`९`.
    DecimalDigitScriptB,
    /// Devanagari block.
    ScriptRangeA,
    Other,
}

impl CharacterClass {
    /// Most specific class for `c`: lowercase, uppercase, ASCII digit,
    /// Devanagari digit, Devanagari block, then `Other`.
    pub const fn of(c: i64) -> Self {
        if is_lower_latin(c) {
            Self::LowercaseLatin
        } else if is_upper_latin(c) {
            Self::UppercaseLatin
        } else if is_digit_a(c) {
            Self::DecimalDigitScriptA
        } else if is_digit_b(c) {
            Self::DecimalDigitScriptB
        } else if is_script_range_a(c) {
            Self::ScriptRangeA
        } else {
            Self::Other
        }
    }

    /// Whether `c` falls in this class's range. `Other` matches nothing, it
    /// is only ever the result of falling through every other range.
    pub const fn contains(self, c: i64) -> bool {
        match self {
            Self::LowercaseLatin => is_lower_latin(c),
            Self::UppercaseLatin => is_upper_latin(c),
            Self::DecimalDigitScriptA => is_digit_a(c),
            Self::DecimalDigitScriptB => is_digit_b(c),
            Self::ScriptRangeA => is_script_range_a(c),
            Self::Other => false,
        }
    }
}

/// Coarse, human-facing character type attached to a conversion result.
///
/// Informational only: it never feeds back into the channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterType {
    Lowercase,
    Uppercase,
    Number,
    OtherLetter,
    Other,
    Unknown,
}

impl CharacterType {
    /// Label derived purely from the code point.
    pub const fn from_class(class: CharacterClass) -> Self {
        match class {
            CharacterClass::LowercaseLatin => Self::Lowercase,
            CharacterClass::UppercaseLatin => Self::Uppercase,
            CharacterClass::DecimalDigitScriptA | CharacterClass::DecimalDigitScriptB => {
                Self::Number
            }
            CharacterClass::ScriptRangeA => Self::OtherLetter,
            CharacterClass::Other => Self::Other,
        }
    }

    /// Label derived from a Unicode general category such as `Ll` or `Nd`.
    ///
    /// `None` means no metadata was available for the character.
    pub fn from_category(category: Option<&str>) -> Self {
        let Some(category) = category else {
            return Self::Unknown;
        };
        if category.starts_with("Ll") {
            Self::Lowercase
        } else if category.starts_with("Lu") {
            Self::Uppercase
        } else if category.starts_with("Nd") {
            Self::Number
        } else if category.starts_with("Lo") {
            Self::OtherLetter
        } else {
            Self::Other
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Number => "number",
            Self::OtherLetter => "other_letter",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
