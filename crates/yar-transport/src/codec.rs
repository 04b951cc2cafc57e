//! Codec trait and JSON implementation

use crate::packager::{Packager, PackagerKind};
use serde::{Serialize, de::DeserializeOwned};
use yar_core::{YarError, YarResult};

/// Trait for message body encoding and decoding
pub trait Codec: Send + Sync {
    /// Encode a value to bytes
    fn encode<T: Serialize>(&self, value: &T) -> YarResult<Vec<u8>>;

    /// Decode bytes to a value
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> YarResult<T>;

    /// Packager tag advertised in the header for bodies this codec produces
    fn packager(&self) -> Packager;
}

/// JSON codec implementation using serde_json
///
/// Output is always compact; the body length in the header counts these bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> YarResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(YarError::Serialization)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> YarResult<T> {
        serde_json::from_slice(data).map_err(|e| YarError::Deserialization(e.to_string()))
    }

    fn packager(&self) -> Packager {
        Packager::json()
    }
}

/// Select the body decoder advertised by `packager`.
///
/// Only `JSON` is decodable; other names are rejected with
/// [`YarError::UnsupportedPackager`].
pub fn codec_for(packager: &Packager) -> YarResult<JsonCodec> {
    if packager.equal(PackagerKind::Json.name()) {
        Ok(JsonCodec::new())
    } else {
        Err(YarError::UnsupportedPackager(packager.name()))
    }
}

#[cfg(test)]
#[path = "codec/codec_tests.rs"]
mod codec_tests;
