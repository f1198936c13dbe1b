//! Runtime configuration for the server and the fetch tool.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use glyphtone_core::{ConfigError, ConversionParams};

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;
/// Default listen address (all interfaces).
const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default location of the character dataset.
const DEFAULT_DATA_PATH: &str = "data/unicode_data.json";

/// Server configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `GLYPHTONE_BIND`
    pub bind: IpAddr,
    /// `GLYPHTONE_PORT`, then `PORT`.
    pub port: u16,
    /// `GLYPHTONE_DATA`
    pub data_path: PathBuf,
    /// `GLYPHTONE_PARAMS`; identity parameters when unset.
    pub params_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppConfig {
    /// Build from an arbitrary variable source. Unparsable values are logged
    /// and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("GLYPHTONE_PORT")
            .map(|v| ("GLYPHTONE_PORT", v))
            .or_else(|| lookup("PORT").map(|v| ("PORT", v)))
            .and_then(|(key, value)| parse_or_warn(key, &value))
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind: lookup("GLYPHTONE_BIND")
                .and_then(|v| parse_or_warn("GLYPHTONE_BIND", &v))
                .unwrap_or(DEFAULT_BIND),
            port,
            data_path: lookup("GLYPHTONE_DATA")
                .filter(|v| !v.is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
            params_path: lookup("GLYPHTONE_PARAMS")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Conversion parameters from `params_path`, or identity parameters.
    pub fn load_params(&self) -> Result<ConversionParams, ConfigError> {
        match &self.params_path {
            Some(path) => {
                let params = ConversionParams::from_path(path)?;
                tracing::info!(path = %path.display(), "using conversion parameters from file");
                Ok(params)
            }
            None => Ok(ConversionParams::default()),
        }
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value, "ignoring unparsable environment variable");
    }
    parsed
}
