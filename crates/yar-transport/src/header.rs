//! The fixed 90-byte YAR header

use crate::packager::{Packager, PACKAGER_LEN, fill_fixed, fixed_str};
use std::io::{Read, Write};
use yar_core::{YarError, YarResult};

/// Encoded size of a [`Header`]
pub const HEADER_LEN: usize = 90;

/// Sentinel identifying a YAR envelope
pub const MAGIC_NUM: u32 = 0x80DF_EC60;

/// Protocol version written by this crate
pub const PROTOCOL_VERSION: u16 = 0;

/// Fixed amount added to the body length in every header.
///
/// No bytes are written for it; readers subtract it again.
pub const BODY_LEN_PADDING: u32 = 8;

/// Largest body a header can announce
pub const MAX_PAYLOAD_LEN: u32 = u32::MAX - BODY_LEN_PADDING;

pub const PROVIDER_LEN: usize = 32;
pub const TOKEN_LEN: usize = 32;

// Field offsets
const ID: usize = 0;
const VERSION: usize = 4;
const MAGIC: usize = 6;
const RESERVED: usize = 10;
const PROVIDER: usize = 14;
const TOKEN: usize = PROVIDER + PROVIDER_LEN;
const BODY_LEN: usize = TOKEN + TOKEN_LEN;
const PKG_NAME: usize = BODY_LEN + 4;

/// YAR transport header
///
/// # Layout
///
/// ```text
/// +----+---------+-----------+----------+----------+--------+----------+----------+
/// | id | version | magic_num | reserved | provider | token  | body_len | pkg_name |
/// | 4  | 2       | 4         | 4        | 32       | 32     | 4        | 8        |
/// +----+---------+-----------+----------+----------+--------+----------+----------+
/// ```
///
/// All integers are big-endian; there is no padding between fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Transaction id, caller-assigned
    pub id: u32,
    pub version: u16,
    pub magic_num: u32,
    pub reserved: u32,
    /// Originator of the message, zero-filled when unset
    pub provider: [u8; PROVIDER_LEN],
    /// Authentication token, zero-filled when unset. Carried, never validated.
    pub token: [u8; TOKEN_LEN],
    /// Body length plus [`BODY_LEN_PADDING`]
    pub body_len: u32,
    pub pkg_name: Packager,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            id: 0,
            version: 0,
            magic_num: 0,
            reserved: 0,
            provider: [0; PROVIDER_LEN],
            token: [0; TOKEN_LEN],
            body_len: 0,
            pkg_name: Packager::default(),
        }
    }
}

impl Header {
    /// Header announcing a JSON body of `body_len` bytes for transaction `id`
    ///
    /// Fails with [`YarError::BodyTooLarge`] when `body_len + 8` does not fit
    /// the 32-bit length field.
    pub fn for_body(id: u32, body_len: usize) -> YarResult<Self> {
        let declared = u32::try_from(body_len)
            .ok()
            .and_then(|n| n.checked_add(BODY_LEN_PADDING))
            .ok_or(YarError::BodyTooLarge {
                len: u32::try_from(body_len).unwrap_or(u32::MAX),
                max: MAX_PAYLOAD_LEN,
            })?;

        Ok(Self {
            id,
            version: PROTOCOL_VERSION,
            magic_num: MAGIC_NUM,
            reserved: 0,
            body_len: declared,
            pkg_name: Packager::json(),
            ..Self::default()
        })
    }

    /// Store up to 32 bytes of `provider`, zero-filling the rest
    pub fn set_provider(&mut self, provider: &str) {
        fill_fixed(&mut self.provider, provider.as_bytes());
    }

    /// Store up to 32 bytes of `token`, zero-filling the rest
    pub fn set_token(&mut self, token: &str) {
        fill_fixed(&mut self.token, token.as_bytes());
    }

    pub fn provider_str(&self) -> String {
        fixed_str(&self.provider)
    }

    pub fn token_str(&self) -> String {
        fixed_str(&self.token)
    }

    /// Number of body bytes that follow the header on the wire
    pub fn payload_len(&self) -> u32 {
        self.body_len.saturating_sub(BODY_LEN_PADDING)
    }

    /// Check magic number and protocol version.
    ///
    /// [`read_header`] never calls this; consumers decide whether to.
    pub fn validate(&self) -> YarResult<()> {
        if self.magic_num != MAGIC_NUM {
            return Err(YarError::InvalidMagic(self.magic_num));
        }
        if self.version != PROTOCOL_VERSION {
            return Err(YarError::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Encode to the fixed big-endian layout
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[ID..VERSION].copy_from_slice(&self.id.to_be_bytes());
        buf[VERSION..MAGIC].copy_from_slice(&self.version.to_be_bytes());
        buf[MAGIC..RESERVED].copy_from_slice(&self.magic_num.to_be_bytes());
        buf[RESERVED..PROVIDER].copy_from_slice(&self.reserved.to_be_bytes());
        buf[PROVIDER..TOKEN].copy_from_slice(&self.provider);
        buf[TOKEN..BODY_LEN].copy_from_slice(&self.token);
        buf[BODY_LEN..PKG_NAME].copy_from_slice(&self.body_len.to_be_bytes());
        buf[PKG_NAME..].copy_from_slice(self.pkg_name.as_bytes());
        buf
    }

    /// Decode from the fixed big-endian layout
    pub fn from_bytes(buf: &[u8; HEADER_LEN]) -> Self {
        let mut provider = [0u8; PROVIDER_LEN];
        provider.copy_from_slice(&buf[PROVIDER..TOKEN]);
        let mut token = [0u8; TOKEN_LEN];
        token.copy_from_slice(&buf[TOKEN..BODY_LEN]);
        let mut pkg_name = [0u8; PACKAGER_LEN];
        pkg_name.copy_from_slice(&buf[PKG_NAME..]);

        Self {
            id: be_u32(buf, ID),
            version: u16::from_be_bytes([buf[VERSION], buf[VERSION + 1]]),
            magic_num: be_u32(buf, MAGIC),
            reserved: be_u32(buf, RESERVED),
            provider,
            token,
            body_len: be_u32(buf, BODY_LEN),
            pkg_name: Packager::from_bytes(pkg_name),
        }
    }

    /// Write the 90 encoded bytes to `writer`
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        tracing::trace!(id = self.id, body_len = self.body_len, "wrote yar header");
        Ok(())
    }
}

fn be_u32(buf: &[u8; HEADER_LEN], at: usize) -> u32 {
    u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

/// Read exactly one header from `reader`.
///
/// Blocks until 90 bytes arrive. A stream that ends early yields
/// [`std::io::ErrorKind::UnexpectedEof`]; no field is validated.
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Header> {
    let mut buf = [0u8; HEADER_LEN];
    reader.read_exact(&mut buf)?;
    let header = Header::from_bytes(&buf);
    tracing::trace!(id = header.id, body_len = header.body_len, "read yar header");
    Ok(header)
}
