//! The four print channels.

use std::str::FromStr;

use crate::error::ConvertError;

/// One CMYK channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Cyan,
    Magenta,
    Yellow,
    /// Key.
    Black,
}

impl Channel {
    /// Channels in output order.
    pub const ALL: [Self; 4] = [Self::Cyan, Self::Magenta, Self::Yellow, Self::Black];

    /// Configuration key for this channel.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Black => "black",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .ok_or_else(|| ConvertError::UnknownChannel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for channel in Channel::ALL {
            assert_eq!(channel.name().parse::<Channel>(), Ok(channel));
        }
    }

    #[test]
    fn test_parse_unknown_name_is_unknown_channel() {
        assert_eq!(
            "key".parse::<Channel>(),
            Err(ConvertError::UnknownChannel("key".to_string()))
        );
        // Names are case-sensitive, matching the configuration keys.
        assert!("Cyan".parse::<Channel>().is_err());
    }
}
