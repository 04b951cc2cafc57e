//! Consuming framed messages from a byte stream

use crate::codec::codec_for;
use crate::header::{BODY_LEN_PADDING, Header, read_header};
use crate::message::{Request, Response};
use serde::de::DeserializeOwned;
use std::io::Read;
use yar_core::{CodecConfig, YarError, YarResult};

/// Reads header and body pairs from an input stream
///
/// Every call blocks until the requested bytes arrive or the stream fails.
/// Headers are returned unvalidated; call [`Header::validate`] when the
/// magic number and version must be checked.
#[derive(Debug)]
pub struct MessageReader<R> {
    inner: R,
    max_body_len: u32,
}

impl<R: Read> MessageReader<R> {
    /// Create a reader with the default body limit
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, &CodecConfig::default())
    }

    /// Create a reader using the limits from `config`
    pub fn with_config(inner: R, config: &CodecConfig) -> Self {
        Self {
            inner,
            max_body_len: config.max_body_len,
        }
    }

    /// Read the next 90-byte header
    pub fn read_header(&mut self) -> std::io::Result<Header> {
        read_header(&mut self.inner)
    }

    /// Read the body announced by `header`
    ///
    /// Consumes `body_len - 8` bytes. Headers declaring fewer than 8 bytes are
    /// malformed; bodies larger than the configured limit are rejected before
    /// any allocation.
    pub fn read_body(&mut self, header: &Header) -> YarResult<Vec<u8>> {
        if header.body_len < BODY_LEN_PADDING {
            return Err(YarError::InvalidFormat(format!(
                "body length {} is below the {} byte minimum",
                header.body_len, BODY_LEN_PADDING
            )));
        }

        let len = header.payload_len();
        if len > self.max_body_len {
            tracing::debug!(id = header.id, len, max = self.max_body_len, "rejecting yar body");
            return Err(YarError::BodyTooLarge {
                len,
                max: self.max_body_len,
            });
        }

        let mut body = vec![0u8; len as usize];
        self.inner.read_exact(&mut body)?;
        tracing::trace!(id = header.id, len, "read yar body");
        Ok(body)
    }

    /// Read a full request, decoding the body with the advertised packager
    pub fn read_request<P: DeserializeOwned>(&mut self) -> YarResult<(Header, Request<P>)> {
        let header = self.read_header()?;
        let body = self.read_body(&header)?;
        let request = Request::decode_with(&codec_for(&header.pkg_name)?, &body)?;
        Ok((header, request))
    }

    /// Read a full response, decoding the body with the advertised packager
    pub fn read_response<T: DeserializeOwned + Default>(
        &mut self,
    ) -> YarResult<(Header, Response<T>)> {
        let header = self.read_header()?;
        let body = self.read_body(&header)?;
        let response = Response::decode_with(&codec_for(&header.pkg_name)?, &body)?;
        Ok((header, response))
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
