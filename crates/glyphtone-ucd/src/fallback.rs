//! Heuristic metadata used when the dataset is missing or has no entry.

use glyphtone_core::CharacterClass;
use glyphtone_core::classify::DEVANAGARI_DIGIT_ZERO;

use crate::block::block_name;
use crate::record::{CharacterRecord, char_string};

/// Category reported for code points outside every known class.
pub const FALLBACK_CATEGORY: &str = "other";

/// Best-effort record derived from the code point alone.
pub fn basic_info(code: u32) -> CharacterRecord {
    CharacterRecord {
        code,
        character: char_string(code),
        name: fallback_name(code),
        block: block_name(code).to_string(),
        category: fallback_category(code).to_string(),
        bidirectional: None,
        combining: None,
        mirrored: None,
    }
}

/// General category guessed from the character class.
pub fn fallback_category(code: u32) -> &'static str {
    match CharacterClass::of(i64::from(code)) {
        CharacterClass::LowercaseLatin => "Ll",
        CharacterClass::UppercaseLatin => "Lu",
        CharacterClass::DecimalDigitScriptA | CharacterClass::DecimalDigitScriptB => "Nd",
        CharacterClass::ScriptRangeA => "Lo",
        CharacterClass::Other => FALLBACK_CATEGORY,
    }
}

pub fn fallback_name(code: u32) -> String {
    let c = i64::from(code);
    match CharacterClass::of(c) {
        CharacterClass::DecimalDigitScriptA => format!("DIGIT {}", c - i64::from(b'0')),
        CharacterClass::DecimalDigitScriptB => {
            format!("DEVANAGARI DIGIT {}", c - DEVANAGARI_DIGIT_ZERO)
        }
        _ => format!("Character {code}"),
    }
}
