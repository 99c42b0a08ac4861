//! Configuration types for parsing.
//!
//! This module provides [`ParseConfig`], the options accepted by
//! [`parse_file_with`](crate::parse::parse_file_with). The defaults
//! reproduce the documented parsing behavior exactly; the options exist for
//! callers that deliberately want to deviate.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParseConfig;
//! use chatlens::platform::Platform;
//!
//! let config = ParseConfig::new().with_fallback_platform(Platform::Sms);
//! ```

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParseConfig;
///
/// // Emit empty multi-format sections instead of dropping them
/// let config = ParseConfig::new().with_drop_empty_sections(false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Platform assumed when a file has no header line but its body matches
    /// the message grammar (default: WhatsApp).
    ///
    /// The grammar is shared across platforms, so without a header the
    /// platform cannot be distinguished; WhatsApp is the historical default.
    pub fallback_platform: Platform,

    /// Drop multi-format sections that parse zero messages (default: true).
    ///
    /// The single-format path always emits a conversation, even an empty
    /// one, so the caller has a visible "unparseable" result to report. The
    /// multi-format path instead drops empty sections. Setting this to
    /// `false` unifies the two paths by emitting empty sections too.
    pub drop_empty_sections: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            fallback_platform: Platform::WhatsApp,
            drop_empty_sections: true,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform assumed for headerless files.
    #[must_use]
    pub fn with_fallback_platform(mut self, platform: Platform) -> Self {
        self.fallback_platform = platform;
        self
    }

    /// Sets whether empty multi-format sections are dropped.
    #[must_use]
    pub fn with_drop_empty_sections(mut self, drop: bool) -> Self {
        self.drop_empty_sections = drop;
        self
    }
}
