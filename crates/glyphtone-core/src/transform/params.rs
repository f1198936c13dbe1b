//! Weight / offset / scale parameters layered on top of the raw formulas.
//!
//! `ConversionParams` is loaded once and then only read. Conversions take it
//! by reference; the server shares a single instance behind an `Arc`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::ConfigError;

/// Pipeline parameters for a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelParams {
    /// Multiplier applied after normalization. Default: 1.0.
    pub weight: f64,
    /// Added to the scaled raw value before normalization. Default: 0.0.
    pub offset: f64,
    /// Multiplier applied to the raw value. Default: 1.0.
    pub scale: f64,
}

impl Default for ChannelParams {
    /// Identity parameters.
    fn default() -> Self {
        Self {
            weight: 1.0,
            offset: 0.0,
            scale: 1.0,
        }
    }
}

impl ChannelParams {
    pub const fn new(weight: f64, offset: f64, scale: f64) -> Self {
        Self {
            weight,
            offset,
            scale,
        }
    }

    /// Run a raw formula value through the pipeline.
    ///
    /// ```text
    /// v = raw × scale
    /// v = (v + offset) / 255
    /// v = v × weight
    /// out = clamp(v, 0, 1)
    /// ```
    ///
    /// The divide by 255 happens even though raw values are already roughly
    /// unit-range, so identity parameters shrink every value by 255. Existing
    /// outputs depend on it; keep it.
    pub fn apply(&self, raw: f64) -> f64 {
        let scaled = raw * self.scale;
        let normalized = (scaled + self.offset) / 255.0;
        let weighted = normalized * self.weight;
        // NaN (e.g. 0 × inf) would survive `clamp`, so map it to the floor.
        if weighted.is_nan() {
            return 0.0;
        }
        weighted.clamp(0.0, 1.0)
    }

    fn validate(&self, channel: Channel) -> Result<(), ConfigError> {
        for (field, value) in [
            ("weight", self.weight),
            ("offset", self.offset),
            ("scale", self.scale),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    channel: channel.name(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Parameters for all four channels.
///
/// Serialized as a map from channel name to `{weight, offset, scale}`; any
/// channel or field left out keeps its identity default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionParams {
    pub cyan: ChannelParams,
    pub magenta: ChannelParams,
    pub yellow: ChannelParams,
    pub black: ChannelParams,
}

impl ConversionParams {
    pub const fn get(&self, channel: Channel) -> &ChannelParams {
        match channel {
            Channel::Cyan => &self.cyan,
            Channel::Magenta => &self.magenta,
            Channel::Yellow => &self.yellow,
            Channel::Black => &self.black,
        }
    }

    /// Copy with one channel's parameters replaced.
    pub fn with(mut self, channel: Channel, params: ChannelParams) -> Self {
        let slot = match channel {
            Channel::Cyan => &mut self.cyan,
            Channel::Magenta => &mut self.magenta,
            Channel::Yellow => &mut self.yellow,
            Channel::Black => &mut self.black,
        };
        *slot = params;
        self
    }

    /// Reject parameters that would poison every conversion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for channel in Channel::ALL {
            self.get(channel).validate(channel)?;
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?params, "loaded conversion parameters");
        Ok(params)
    }
}
