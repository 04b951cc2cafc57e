//! Provider and token stamped into outgoing headers

use crate::header::Header;
use yar_core::CodecConfig;

/// Optional provider/token pair applied to each header a message writes.
///
/// The default leaves both fields zero-filled on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    /// Message originator (truncated to 32 bytes on the wire)
    pub provider: Option<String>,

    /// Authentication token (truncated to 32 bytes on the wire)
    pub token: Option<String>,
}

impl Envelope {
    /// Create an envelope with no provider and no token
    pub fn new() -> Self {
        Self::default()
    }

    /// Set provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Take provider and token from a codec configuration
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            token: config.token.clone(),
        }
    }

    pub(crate) fn apply(&self, header: &mut Header) {
        if let Some(provider) = &self.provider {
            header.set_provider(provider);
        }
        if let Some(token) = &self.token {
            header.set_token(token);
        }
    }
}

#[cfg(test)]
#[path = "envelope/envelope_tests.rs"]
mod envelope_tests;
