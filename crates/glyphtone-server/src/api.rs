//! JSON response shapes.

use glyphtone_core::{CharacterType, Cmyk, ColorResult};
use glyphtone_ucd::CharacterRecord;
use serde::Serialize;

use crate::error::ApiError;

/// `GET /api/ascii-to-cmyk/{code}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub cmyk: Cmyk,
    pub character_info: CharacterInfo,
}

/// Character details merged into a conversion response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterInfo {
    #[serde(rename = "type")]
    pub kind: CharacterType,
    pub code: u32,
    /// `U+` followed by uppercase hex without padding, e.g. `U+61`.
    pub unicode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ConversionResponse {
    /// Merge a conversion with whatever metadata the lookup produced.
    ///
    /// The type label follows the metadata category; without metadata it is
    /// `unknown`. Channel values are taken from `result` unchanged.
    pub fn new(result: ColorResult, record: Option<CharacterRecord>) -> Self {
        let kind = CharacterType::from_category(record.as_ref().map(|r| r.category.as_str()));
        let code = result.code_point;
        let (character, name, block, category) = match record {
            Some(r) => (r.character, Some(r.name), Some(r.block), Some(r.category)),
            None => (None, None, None, None),
        };
        Self {
            cmyk: result.cmyk,
            character_info: CharacterInfo {
                kind,
                code,
                unicode: format!("U+{code:X}"),
                character,
                name,
                block,
                category,
            },
        }
    }
}

/// One entry of `GET /api/examples`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub character: String,
    pub code: u32,
    pub result: ConversionResponse,
}

/// `GET /api/examples`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamplesResponse {
    pub lowercase: Example,
    pub uppercase: Example,
    pub number: Example,
    pub marathi: Example,
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Parse the `{code}` segment of `/api/char/{code}`: hexadecimal, with an
/// optional `U+` or `0x` prefix.
pub fn parse_hex_code(input: &str) -> Result<u32, ApiError> {
    let trimmed = input.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ApiError::InvalidCharacterCode(input.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| ApiError::InvalidCharacterCode(input.to_string()))
}

#[cfg(test)]
mod tests {
    use glyphtone_core::{ConversionParams, convert};

    use super::*;

    #[test]
    fn test_parse_hex_code() {
        assert_eq!(parse_hex_code("41").unwrap(), 0x41);
        assert_eq!(parse_hex_code("U+0905").unwrap(), 0x0905);
        assert_eq!(parse_hex_code("0x1f600").unwrap(), 0x1F600);
        for bad in ["", "U+", "xyz", "-41", "+41", "123456789AB"] {
            assert!(
                matches!(parse_hex_code(bad), Err(ApiError::InvalidCharacterCode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_response_without_metadata_is_unknown() {
        let result = convert(0x61, &ConversionParams::default());
        let response = ConversionResponse::new(result, None);
        assert_eq!(response.character_info.kind, CharacterType::Unknown);
        assert_eq!(response.character_info.unicode, "U+61");

        let json = serde_json::to_value(&response).unwrap();
        let info = &json["characterInfo"];
        assert_eq!(info["type"], "unknown");
        assert!(info.get("name").is_none());
        assert!(info.get("category").is_none());
    }

    #[test]
    fn test_response_type_follows_metadata_category() {
        // Metadata wins over the class-derived label.
        let result = convert(0x0901, &ConversionParams::default());
        assert_eq!(result.character_type, CharacterType::OtherLetter);
        let record = CharacterRecord {
            code: 0x0901,
            character: Some("\u{0901}".to_string()),
            name: "DEVANAGARI SIGN CANDRABINDU".to_string(),
            block: "Devanagari".to_string(),
            category: "Mn".to_string(),
            bidirectional: None,
            combining: None,
            mirrored: None,
        };
        let response = ConversionResponse::new(result, Some(record));
        assert_eq!(response.character_info.kind, CharacterType::Other);
        assert_eq!(response.character_info.unicode, "U+901");
        assert_eq!(response.cmyk, result.cmyk);
    }
}
