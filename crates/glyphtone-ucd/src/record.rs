//! Character metadata records as stored in the dataset file.

use serde::{Deserialize, Serialize};

/// Metadata for one code point.
///
/// The optional fields are only known for records that came from
/// `UnicodeData.txt`; fallback records leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub code: u32,
    /// The character itself, absent for surrogates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    pub name: String,
    pub block: String,
    /// Unicode general category, e.g. `Lu`.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<String>,
    /// Canonical combining class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combining: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrored: Option<bool>,
}

/// Short listing entry returned for block queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMember {
    pub code: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    pub name: String,
}

impl From<&CharacterRecord> for BlockMember {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            code: record.code,
            character: record.character.clone(),
            name: record.name.clone(),
        }
    }
}

/// The character for `code` as a string, if it is a Unicode scalar value.
pub fn char_string(code: u32) -> Option<String> {
    char::from_u32(code).map(String::from)
}
