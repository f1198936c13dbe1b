//! Per-channel raw formulas.
//!
//! Each channel owns an ordered rule list. The first rule whose class
//! contains the code point picks the formula; otherwise the channel default
//! applies.
//!
//! ```text
//! cyan     lowercase → ascii digit → devanagari digit → c/255
//! magenta  uppercase → ascii digit → devanagari digit → (255-c)/255
//! yellow   ascii digit → devanagari digit             → c/255
//! black    devanagari block → ascii digit → devanagari digit → (255-c)/255
//! ```

use std::f64::consts::PI;

use crate::channel::Channel;
use crate::classify::{CharacterClass, DEVANAGARI_DIGIT_ZERO, DEVANAGARI_START};

const ASCII_LOWER_A: i64 = 97;
const ASCII_UPPER_A: i64 = 65;
const ASCII_ZERO: i64 = 48;

/// A raw channel formula of the code point `c`.
///
/// Ramps return roughly [0, 1] over their run, waves return [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// `(c - origin) / span`
    Ramp { origin: i64, span: f64 },
    /// `1 - (c - origin) / span`
    InverseRamp { origin: i64, span: f64 },
    /// `sin((c - origin) · π / divisor)`
    Sine { origin: i64, divisor: f64 },
    /// `cos((c - origin) · π / divisor)`
    Cosine { origin: i64, divisor: f64 },
    /// `c / 255`
    ByteRamp,
    /// `(255 - c) / 255`
    InverseByteRamp,
}

/// A formula that produced something other than a finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaFault {
    pub formula: Formula,
    pub code_point: i64,
    pub value: f64,
}

impl Formula {
    /// Evaluate at `c`. Non-finite results are reported as a fault so the
    /// caller can apply its fallback policy.
    pub fn evaluate(self, c: i64) -> Result<f64, FormulaFault> {
        // Offsets are taken in f64 so extreme inputs cannot overflow; every
        // code point is exactly representable.
        let x = c as f64;
        let value = match self {
            Self::Ramp { origin, span } => (x - origin as f64) / span,
            Self::InverseRamp { origin, span } => 1.0 - (x - origin as f64) / span,
            Self::Sine { origin, divisor } => ((x - origin as f64) * PI / divisor).sin(),
            Self::Cosine { origin, divisor } => ((x - origin as f64) * PI / divisor).cos(),
            Self::ByteRamp => x / 255.0,
            Self::InverseByteRamp => (255.0 - x) / 255.0,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FormulaFault {
                formula: self,
                code_point: c,
                value,
            })
        }
    }
}

/// Ordered `(class, formula)` rules plus the fall-through formula.
#[derive(Debug, Clone, Copy)]
pub struct ChannelRules {
    pub rules: &'static [(CharacterClass, Formula)],
    pub default: Formula,
}

impl ChannelRules {
    /// Formula selected for `c`.
    pub fn select(&self, c: i64) -> Formula {
        self.rules
            .iter()
            .find(|(class, _)| class.contains(c))
            .map_or(self.default, |&(_, formula)| formula)
    }
}

const DIGIT_WAVE_DIVISOR: f64 = 5.0;
const SCRIPT_WAVE_DIVISOR: f64 = 128.0;

const ASCII_DIGIT_SINE: Formula = Formula::Sine {
    origin: ASCII_ZERO,
    divisor: DIGIT_WAVE_DIVISOR,
};
const DEVANAGARI_DIGIT_SINE: Formula = Formula::Sine {
    origin: DEVANAGARI_DIGIT_ZERO,
    divisor: DIGIT_WAVE_DIVISOR,
};

pub const CYAN_RULES: ChannelRules = ChannelRules {
    rules: &[
        (
            CharacterClass::LowercaseLatin,
            Formula::Ramp {
                origin: ASCII_LOWER_A,
                span: 25.0,
            },
        ),
        (
            CharacterClass::DecimalDigitScriptA,
            Formula::Ramp {
                origin: ASCII_ZERO,
                span: 9.0,
            },
        ),
        (
            CharacterClass::DecimalDigitScriptB,
            Formula::Ramp {
                origin: DEVANAGARI_DIGIT_ZERO,
                span: 9.0,
            },
        ),
    ],
    default: Formula::ByteRamp,
};

pub const MAGENTA_RULES: ChannelRules = ChannelRules {
    rules: &[
        (
            CharacterClass::UppercaseLatin,
            Formula::InverseRamp {
                origin: ASCII_UPPER_A,
                span: 25.0,
            },
        ),
        (CharacterClass::DecimalDigitScriptA, ASCII_DIGIT_SINE),
        (CharacterClass::DecimalDigitScriptB, DEVANAGARI_DIGIT_SINE),
    ],
    default: Formula::InverseByteRamp,
};

pub const YELLOW_RULES: ChannelRules = ChannelRules {
    rules: &[
        (
            CharacterClass::DecimalDigitScriptA,
            Formula::Cosine {
                origin: ASCII_ZERO,
                divisor: DIGIT_WAVE_DIVISOR,
            },
        ),
        (
            CharacterClass::DecimalDigitScriptB,
            Formula::Cosine {
                origin: DEVANAGARI_DIGIT_ZERO,
                divisor: DIGIT_WAVE_DIVISOR,
            },
        ),
    ],
    default: Formula::ByteRamp,
};

// The block rule comes first, so Devanagari digits take the slow cosine here
// and never reach the digit sine.
pub const BLACK_RULES: ChannelRules = ChannelRules {
    rules: &[
        (
            CharacterClass::ScriptRangeA,
            Formula::Cosine {
                origin: DEVANAGARI_START,
                divisor: SCRIPT_WAVE_DIVISOR,
            },
        ),
        (CharacterClass::DecimalDigitScriptA, ASCII_DIGIT_SINE),
        (CharacterClass::DecimalDigitScriptB, DEVANAGARI_DIGIT_SINE),
    ],
    default: Formula::InverseByteRamp,
};

/// Rule table for a channel.
pub const fn rules_for(channel: Channel) -> &'static ChannelRules {
    match channel {
        Channel::Cyan => &CYAN_RULES,
        Channel::Magenta => &MAGENTA_RULES,
        Channel::Yellow => &YELLOW_RULES,
        Channel::Black => &BLACK_RULES,
    }
}
