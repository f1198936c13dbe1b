//! `UnicodeData.txt` parser.
//!
//! One record per line, 15 `;`-separated fields:
//!
//! ```text
//! 0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
//! ^code ^name                 ^gc ^ccc ^bidi   ^mirrored (field 9)
//! ```

use crate::block::block_name;
use crate::error::UcdError;
use crate::record::{CharacterRecord, char_string};

const FIELD_COUNT: usize = 15;

/// General categories left out of the dataset: controls, surrogates and
/// private use.
const SKIPPED_CATEGORIES: [&str; 3] = ["Cc", "Cs", "Co"];

/// Parse the whole file.
///
/// Blank lines and lines with too few fields are skipped. A line with the
/// right shape but an unparsable code point or combining class is an error.
pub fn parse_unicode_data(text: &str) -> Result<Vec<CharacterRecord>, UcdError> {
    let mut records = Vec::new();
    let mut short_lines = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, idx + 1)? {
            Line::Record(record) => records.push(record),
            Line::Skipped => {}
            Line::Short => short_lines += 1,
        }
    }

    if short_lines > 0 {
        tracing::warn!(short_lines, "ignored lines with fewer than {FIELD_COUNT} fields");
    }
    tracing::debug!(records = records.len(), "parsed UnicodeData");
    Ok(records)
}

enum Line {
    Record(CharacterRecord),
    Skipped,
    Short,
}

fn parse_line(line: &str, line_no: usize) -> Result<Line, UcdError> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() < FIELD_COUNT {
        return Ok(Line::Short);
    }

    let category = fields[2];
    if SKIPPED_CATEGORIES.contains(&category) {
        return Ok(Line::Skipped);
    }

    let malformed = |reason: String| UcdError::Malformed {
        line: line_no,
        reason,
    };

    let code = u32::from_str_radix(fields[0].trim(), 16)
        .map_err(|e| malformed(format!("code point {:?}: {e}", fields[0])))?;
    let combining = fields[3]
        .trim()
        .parse::<u8>()
        .map_err(|e| malformed(format!("combining class {:?}: {e}", fields[3])))?;

    Ok(Line::Record(CharacterRecord {
        code,
        character: char_string(code),
        name: fields[1].to_string(),
        block: block_name(code).to_string(),
        category: category.to_string(),
        bidirectional: Some(fields[4].to_string()),
        combining: Some(combining),
        mirrored: Some(fields[9] == "Y"),
    }))
}
