//! Codec configuration

use serde::{Deserialize, Serialize};

/// Settings shared by message writers and readers
///
/// Loaded from JSON by library callers or from TOML by the `yar` CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Provider stamped into every outgoing header (zero-filled when unset)
    #[serde(default)]
    pub provider: Option<String>,

    /// Token stamped into every outgoing header (zero-filled when unset)
    #[serde(default)]
    pub token: Option<String>,

    /// Largest body a reader will allocate for
    #[serde(default = "default_max_body_len")]
    pub max_body_len: u32,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_body_len() -> u32 {
    16 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            provider: None,
            token: None,
            max_body_len: default_max_body_len(),
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set the token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the maximum body length accepted by readers
    pub fn with_max_body_len(mut self, max: u32) -> Self {
        self.max_body_len = max;
        self
    }
}
