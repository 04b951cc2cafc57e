//! yar-transport - YAR RPC wire format
//!
//! This crate provides:
//! - [`Packager`] fixed-width tag naming the body encoding
//! - [`Header`] the 90-byte big-endian envelope, and [`read_header`]
//! - [`Request`] and [`Response`] with framed `write_to` / `write_with`
//! - [`Envelope`] for stamping provider and token into outgoing headers
//! - [`Codec`] trait and [`JsonCodec`] for body (de)serialization
//! - [`MessageReader`] for consuming framed messages from a stream
//!
//! ## Wire Format
//!
//! ```text
//! offset  size  field
//! 0       4     id (u32)
//! 4       2     version (u16)
//! 6       4     magic_num (u32) = 0x80DFEC60
//! 10      4     reserved (u32)
//! 14      32    provider
//! 46      32    token
//! 78      4     body_len (u32) = len(body) + 8
//! 82      8     pkg_name
//! 90..          body
//! ```
//!
//! All integers are big-endian.

mod codec;
mod envelope;
mod header;
mod message;
mod packager;
mod reader;

pub use codec::{Codec, JsonCodec, codec_for};
pub use envelope::Envelope;
pub use header::{
    BODY_LEN_PADDING, HEADER_LEN, Header, MAGIC_NUM, MAX_PAYLOAD_LEN, PROTOCOL_VERSION,
    PROVIDER_LEN, TOKEN_LEN, read_header,
};
pub use message::{Request, Response};
pub use packager::{PACKAGER_LEN, Packager, PackagerKind};
pub use reader::MessageReader;
pub use yar_core::{YarError, YarResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, Envelope, Header, JsonCodec, MessageReader, Packager, PackagerKind, Request,
        Response, YarError, YarResult, read_header,
    };
}
