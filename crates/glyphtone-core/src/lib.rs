//! Glyphtone Core — deterministic code point to CMYK transformation.
//!
//! Classifies a code point, picks a per-channel formula, runs the result
//! through the weight/offset/scale pipeline and clamps to [0, 1]. Pure and
//! synchronous; no I/O beyond optionally reading a parameter file.

pub mod channel;
pub mod classify;
pub mod convert;
pub mod error;
pub mod transform;

// Re-exports for convenience.
pub use channel::Channel;
pub use classify::{CharacterClass, CharacterType};
pub use convert::{
    Cmyk, ColorResult, MAX_CODE_POINT, clamp_code_point, convert, convert_exact, convert_input,
    parse_code_point,
};
pub use error::{ConfigError, ConvertError};
pub use transform::evaluate::channel_value;
pub use transform::params::{ChannelParams, ConversionParams};
