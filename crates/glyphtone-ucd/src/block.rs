//! Built-in Unicode block table.
//!
//! Covers the blocks the service is commonly asked about, not the full
//! Blocks.txt. Anything else reports [`UNKNOWN_BLOCK`].

/// Block name for code points outside the table.
pub const UNKNOWN_BLOCK: &str = "Unknown";

/// A named, closed range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: u32,
    pub end: u32,
    pub name: &'static str,
}

impl Block {
    const fn new(start: u32, end: u32, name: &'static str) -> Self {
        Self { start, end, name }
    }

    pub const fn contains(&self, code: u32) -> bool {
        code >= self.start && code <= self.end
    }
}

/// Sorted by `start`, non-overlapping.
pub const BLOCKS: &[Block] = &[
    Block::new(0x0000, 0x007F, "Basic Latin"),
    Block::new(0x0080, 0x00FF, "Latin-1 Supplement"),
    Block::new(0x0100, 0x017F, "Latin Extended-A"),
    Block::new(0x0180, 0x024F, "Latin Extended-B"),
    Block::new(0x0250, 0x02AF, "IPA Extensions"),
    Block::new(0x02B0, 0x02FF, "Spacing Modifier Letters"),
    Block::new(0x0300, 0x036F, "Combining Diacritical Marks"),
    Block::new(0x0370, 0x03FF, "Greek and Coptic"),
    Block::new(0x0400, 0x04FF, "Cyrillic"),
    Block::new(0x0530, 0x058F, "Armenian"),
    Block::new(0x0590, 0x05FF, "Hebrew"),
    Block::new(0x0600, 0x06FF, "Arabic"),
    Block::new(0x0900, 0x097F, "Devanagari"),
    Block::new(0x0980, 0x09FF, "Bengali"),
    Block::new(0x0E00, 0x0E7F, "Thai"),
    Block::new(0x2000, 0x206F, "General Punctuation"),
    Block::new(0x20A0, 0x20CF, "Currency Symbols"),
    Block::new(0x2190, 0x21FF, "Arrows"),
    Block::new(0x2200, 0x22FF, "Mathematical Operators"),
    Block::new(0x2500, 0x257F, "Box Drawing"),
    Block::new(0x3040, 0x309F, "Hiragana"),
    Block::new(0x30A0, 0x30FF, "Katakana"),
    Block::new(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
    Block::new(0xAC00, 0xD7AF, "Hangul Syllables"),
    Block::new(0x1F300, 0x1F5FF, "Miscellaneous Symbols and Pictographs"),
    Block::new(0x1F600, 0x1F64F, "Emoticons"),
];

/// Block containing `code`, if it is in the table.
pub fn find_block(code: u32) -> Option<&'static Block> {
    let idx = BLOCKS.partition_point(|block| block.end < code);
    BLOCKS.get(idx).filter(|block| block.contains(code))
}

/// Block name for `code`, or [`UNKNOWN_BLOCK`].
pub fn block_name(code: u32) -> &'static str {
    find_block(code).map_or(UNKNOWN_BLOCK, |block| block.name)
}
