//! # yar
//!
//! A codec for the YAR RPC wire protocol: a fixed 90-byte big-endian header
//! followed by a JSON request or response body.
//!
//! ## Writing a request
//!
//! ```
//! use yar::prelude::*;
//! use serde_json::json;
//!
//! let request = Request::new(1, "add", vec![json!(1), json!(2)]);
//! let mut wire = Vec::new();
//! request.write_to(&mut wire)?;
//!
//! assert_eq!(&wire[yar::HEADER_LEN..], br#"{"i":1,"m":"add","p":[1,2]}"#);
//! # Ok::<(), YarError>(())
//! ```
//!
//! ## Reading it back
//!
//! ```
//! use yar::prelude::*;
//! # use serde_json::json;
//! # let mut wire = Vec::new();
//! # Request::new(1, "add", vec![json!(1), json!(2)]).write_to(&mut wire)?;
//!
//! let mut reader = MessageReader::new(std::io::Cursor::new(wire));
//! let (header, request): (Header, Request) = reader.read_request()?;
//!
//! assert_eq!(header.magic_num, yar::MAGIC_NUM);
//! assert!(header.pkg_name.equal("JSON"));
//! assert_eq!(request.method, "add");
//! # Ok::<(), YarError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`yar_core`] - Errors, configuration, log levels
//! - [`yar_transport`] - Header, packager, messages, reader
//! - [`yar_logging`] - Subscriber setup

// Re-export core types
pub use yar_core::{CodecConfig, LogLevel, YarError, YarResult};

// Re-export wire types
pub use yar_transport::{
    BODY_LEN_PADDING, Codec, Envelope, HEADER_LEN, Header, JsonCodec, MAGIC_NUM, MessageReader,
    PACKAGER_LEN, PROTOCOL_VERSION, PROVIDER_LEN, Packager, PackagerKind, Request, Response,
    TOKEN_LEN, codec_for, read_header,
};

pub use yar_logging::{init_from_config, init_logging, set_log_level};

pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use yar::prelude::*;` to import the commonly used types.
pub mod prelude {
    pub use crate::{
        CodecConfig, Envelope, Header, MessageReader, Packager, Request, Response, YarError,
        YarResult, read_header,
    };
}
