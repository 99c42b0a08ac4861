//! Platform identification for transcript exports.
//!
//! Every transcript handled by chatlens shares the same bracketed-timestamp
//! line grammar; what distinguishes exports is the platform header on the
//! first line (`[WhatsApp]`, `[Insta]`, `[Discord]`, `[SMS]`) or, in the
//! composite multi-format, the platform token of each section header.
//!
//! # Example
//!
//! ```rust
//! use chatlens::platform::Platform;
//! use std::str::FromStr;
//!
//! let platform = Platform::from_str("whatsapp").unwrap();
//! assert_eq!(platform, Platform::WhatsApp);
//!
//! // The short Instagram alias is supported
//! let platform = Platform::from_str("insta").unwrap();
//! assert_eq!(platform, Platform::Instagram);
//! ```

use serde::{Deserialize, Serialize};

/// Supported messaging platforms.
///
/// Identifies the source platform of a conversation. Serialized in
/// lowercase (`"whatsapp"`, `"instagram"`, `"discord"`, `"sms"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// WhatsApp text exports
    WhatsApp,

    /// Instagram text exports
    #[serde(alias = "insta")]
    Instagram,

    /// Discord text exports
    Discord,

    /// SMS backup text exports
    Sms,
}

impl Platform {
    /// Returns the lowercase tag used in serialized data and message ids.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::Instagram => "instagram",
            Platform::Discord => "discord",
            Platform::Sms => "sms",
        }
    }

    /// Returns the exact header line that marks an export from this platform.
    ///
    /// Header literals are case-sensitive and matched against whole trimmed
    /// lines, never substrings.
    pub fn header(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "[WhatsApp]",
            Platform::Instagram => "[Insta]",
            Platform::Discord => "[Discord]",
            Platform::Sms => "[SMS]",
        }
    }

    /// Matches a trimmed line against the recognized platform headers.
    pub fn from_header_line(line: &str) -> Option<Platform> {
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.header() == line)
    }

    /// Maps a multi-format section token to a platform.
    ///
    /// Matching is case-insensitive and accepts `insta` as well as
    /// `instagram`. Unrecognized tokens fall back to WhatsApp, so a section
    /// never fails on its platform name alone.
    pub fn from_section_token(token: &str) -> Platform {
        match token.to_lowercase().as_str() {
            "insta" | "instagram" => Platform::Instagram,
            "discord" => Platform::Discord,
            "sms" => Platform::Sms,
            _ => Platform::WhatsApp,
        }
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["whatsapp", "instagram", "insta", "discord", "sms"]
    }

    /// Returns all available platforms.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::WhatsApp,
            Platform::Instagram,
            Platform::Discord,
            Platform::Sms,
        ]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::WhatsApp => write!(f, "WhatsApp"),
            Platform::Instagram => write!(f, "Instagram"),
            Platform::Discord => write!(f, "Discord"),
            Platform::Sms => write!(f, "SMS"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" => Ok(Platform::WhatsApp),
            "instagram" | "insta" => Ok(Platform::Instagram),
            "discord" => Ok(Platform::Discord),
            "sms" => Ok(Platform::Sms),
            _ => Err(format!(
                "Unknown platform: '{}'. Expected one of: {}",
                s,
                Platform::all_names().join(", ")
            )),
        }
    }
}
