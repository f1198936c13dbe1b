//! Top-level code point to CMYK conversion.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::classify::{CharacterClass, CharacterType};
use crate::error::ConvertError;
use crate::transform::evaluate::channel_value;
use crate::transform::params::ConversionParams;

/// Highest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Four channel values, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Cyan => self.c,
            Channel::Magenta => self.m,
            Channel::Yellow => self.y,
            Channel::Black => self.k,
        }
    }

    /// Presentation copy with every channel rounded to 2 decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            c: round2(self.c),
            m: round2(self.m),
            y: round2(self.y),
            k: round2(self.k),
        }
    }
}

/// Result of converting one code point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorResult {
    /// Channel values rounded to 2 decimal places.
    pub cmyk: Cmyk,
    /// Label derived from the code point's class.
    pub character_type: CharacterType,
    /// The code point after clamping.
    pub code_point: u32,
}

/// Clamp any integer into `[0, 0x10FFFF]`.
pub fn clamp_code_point(code_point: i64) -> u32 {
    // Lossless: the clamped value fits in u32.
    code_point.clamp(0, i64::from(MAX_CODE_POINT)) as u32
}

/// Full-precision channel values for `code_point` (after clamping).
pub fn convert_exact(code_point: i64, params: &ConversionParams) -> Cmyk {
    let c = i64::from(clamp_code_point(code_point));
    Cmyk {
        c: channel_value(Channel::Cyan, c, params),
        m: channel_value(Channel::Magenta, c, params),
        y: channel_value(Channel::Yellow, c, params),
        k: channel_value(Channel::Black, c, params),
    }
}

/// Convert a code point to rounded CMYK plus its class-derived label.
///
/// Out-of-range inputs are clamped rather than rejected. Pure for a fixed
/// `params`.
pub fn convert(code_point: i64, params: &ConversionParams) -> ColorResult {
    let clamped = clamp_code_point(code_point);
    let class = CharacterClass::of(i64::from(clamped));
    ColorResult {
        cmyk: convert_exact(code_point, params).rounded(),
        character_type: CharacterType::from_class(class),
        code_point: clamped,
    }
}

/// Parse untrusted text and convert it.
///
/// Non-numeric input is rejected with [`ConvertError::InvalidCodePoint`]
/// before any computation.
pub fn convert_input(input: &str, params: &ConversionParams) -> Result<ColorResult, ConvertError> {
    let code_point = parse_code_point(input)?;
    Ok(convert(code_point, params))
}

/// Parse a code point written in decimal (optionally signed), `0x` hex, or
/// `U+` hex. Magnitudes beyond `i64` saturate; clamping happens later.
pub fn parse_code_point(input: &str) -> Result<i64, ConvertError> {
    let trimmed = input.trim();
    let invalid = || ConvertError::InvalidCodePoint(input.to_string());

    let hex_digits = ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix));
    let (digits, radix) = match hex_digits {
        Some(digits) => (digits, 16),
        None => (trimmed, 10),
    };

    // `from_str_radix` tolerates a leading sign; hex forms must not have one.
    if radix == 16 && digits.starts_with(['+', '-']) {
        return Err(invalid());
    }

    match i64::from_str_radix(digits, radix) {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid()),
        },
    }
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
