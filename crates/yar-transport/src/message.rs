//! Request and response bodies and the framed write path

use crate::codec::{Codec, JsonCodec};
use crate::envelope::Envelope;
use crate::header::Header;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::io::Write;
use yar_core::{YarError, YarResult};

/// A method call
///
/// Serialized as `{"i": id, "m": method, "p": [params...]}`. Params bind
/// positionally, so their order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request<P = serde_json::Value> {
    /// Transaction id, copied into the header
    #[serde(rename = "i")]
    pub id: u32,

    /// Name of the remote procedure
    #[serde(rename = "m")]
    pub method: String,

    #[serde(rename = "p")]
    pub params: Vec<P>,
}

#[derive(Deserialize)]
struct RawRequest<P> {
    i: u32,
    m: String,
    p: Option<Vec<P>>,
}

impl<P> Request<P> {
    /// Create a request
    pub fn new(id: u32, method: impl Into<String>, params: Vec<P>) -> Self {
        Self {
            id,
            method: method.into(),
            params,
        }
    }

    /// Append a positional parameter
    pub fn with_param(mut self, param: P) -> Self {
        self.params.push(param);
        self
    }
}

impl<P: Serialize> Request<P> {
    /// Serialize the body as compact JSON
    pub fn to_body(&self) -> YarResult<Vec<u8>> {
        JsonCodec::new().encode(self)
    }

    /// Write header and body to `writer` with provider and token left blank
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> YarResult<()> {
        self.write_with(writer, &Envelope::default())
    }

    /// Write header and body to `writer`, stamping `envelope` into the header
    ///
    /// The body is serialized before anything is written, so a serialization
    /// failure leaves `writer` untouched. Header and body are two separate
    /// writes; if the second fails the stream holds a header whose body never
    /// arrives.
    pub fn write_with<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        envelope: &Envelope,
    ) -> YarResult<()> {
        let body = self.to_body()?;
        write_framed(writer, self.id, &body, envelope)
    }

    /// Encode header and body into a single buffer
    pub fn to_frame(&self, envelope: &Envelope) -> YarResult<Vec<u8>> {
        let mut frame = Vec::new();
        self.write_with(&mut frame, envelope)?;
        Ok(frame)
    }
}

impl<P: DeserializeOwned> Request<P> {
    /// Decode a request body.
    ///
    /// A body without a `p` member is rejected with [`YarError::MissingParams`].
    pub fn from_body(body: &[u8]) -> YarResult<Self> {
        Self::decode_with(&JsonCodec::new(), body)
    }

    pub(crate) fn decode_with<C: Codec>(codec: &C, body: &[u8]) -> YarResult<Self> {
        let raw: RawRequest<P> = codec.decode(body)?;
        let params = raw.p.ok_or(YarError::MissingParams)?;
        Ok(Self {
            id: raw.i,
            method: raw.m,
            params,
        })
    }
}

/// The result of a method call
///
/// Serialized as `{"i": id, "s": status, "r": result, "o": output, "e": error}`,
/// every member always present. Decoding is lenient: a missing `r`, `o` or `e`
/// takes its default (`null` for the untyped result).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<R = serde_json::Value> {
    /// Echo of the request's transaction id
    #[serde(rename = "i")]
    pub id: u32,

    /// Result or error code; its meaning belongs to the caller
    #[serde(rename = "s")]
    pub status: i32,

    /// Return value, meaningful on success
    #[serde(rename = "r", default)]
    pub result: R,

    /// Captured standard output of the remote call
    #[serde(rename = "o", default)]
    pub output: String,

    /// Error message, empty on success
    #[serde(rename = "e", default)]
    pub error: String,
}

impl<R> Response<R> {
    /// Successful response carrying `result`
    pub fn success(id: u32, result: R) -> Self {
        Self {
            id,
            status: 0,
            result,
            output: String::new(),
            error: String::new(),
        }
    }

    /// Attach captured output
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }
}

impl<R: Default> Response<R> {
    /// Failed response with `status` and a message; the result is left at its default
    pub fn error(id: u32, status: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            status,
            result: R::default(),
            output: String::new(),
            error: message.into(),
        }
    }
}

impl<R: Serialize> Response<R> {
    /// Serialize the body as compact JSON
    pub fn to_body(&self) -> YarResult<Vec<u8>> {
        JsonCodec::new().encode(self)
    }

    /// Write header and body to `writer` with provider and token left blank
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> YarResult<()> {
        self.write_with(writer, &Envelope::default())
    }

    /// Write header and body to `writer`, stamping `envelope` into the header
    ///
    /// Same failure behaviour as [`Request::write_with`]; serialization errors
    /// are returned to the caller.
    pub fn write_with<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        envelope: &Envelope,
    ) -> YarResult<()> {
        let body = self.to_body()?;
        write_framed(writer, self.id, &body, envelope)
    }

    /// Encode header and body into a single buffer
    pub fn to_frame(&self, envelope: &Envelope) -> YarResult<Vec<u8>> {
        let mut frame = Vec::new();
        self.write_with(&mut frame, envelope)?;
        Ok(frame)
    }
}

impl<R: DeserializeOwned + Default> Response<R> {
    /// Decode a response body
    pub fn from_body(body: &[u8]) -> YarResult<Self> {
        Self::decode_with(&JsonCodec::new(), body)
    }

    pub(crate) fn decode_with<C: Codec>(codec: &C, body: &[u8]) -> YarResult<Self> {
        codec.decode(body)
    }
}

fn frame_header(id: u32, body_len: usize, envelope: &Envelope) -> YarResult<Header> {
    let mut header = Header::for_body(id, body_len)?;
    envelope.apply(&mut header);
    Ok(header)
}

// The header is fully built before the first write, so an oversized body
// leaves `writer` untouched.
fn write_framed<W: Write + ?Sized>(
    writer: &mut W,
    id: u32,
    body: &[u8],
    envelope: &Envelope,
) -> YarResult<()> {
    let header = frame_header(id, body.len(), envelope)?;

    header.write_to(writer)?;
    writer.write_all(body)?;
    tracing::trace!(id, body_len = body.len(), "wrote yar body");
    Ok(())
}
