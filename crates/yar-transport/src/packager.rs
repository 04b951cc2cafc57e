//! Packager tag naming the body encoding

use std::fmt;

/// Width of the packager field in the header
pub const PACKAGER_LEN: usize = 8;

/// 8-byte ASCII tag naming the serialization format of a message body
///
/// The tag is left-aligned and zero-padded. Comparison through [`Packager::equal`]
/// is a prefix match: only the first `min(8, tag.len())` bytes are compared, so a
/// stored `"JSON"` equals `"JS"` as well as `"JSON"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Packager([u8; PACKAGER_LEN]);

/// Packager names used across the YAR family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagerKind {
    Php,
    Json,
    Msgpack,
}

impl PackagerKind {
    /// Tag written into the header for this kind
    pub fn name(&self) -> &'static str {
        match self {
            PackagerKind::Php => "PHP",
            PackagerKind::Json => "JSON",
            PackagerKind::Msgpack => "MSGPACK",
        }
    }
}

impl Packager {
    /// Create a packager holding `tag`
    pub fn new(tag: &str) -> Self {
        let mut packager = Self::default();
        packager.set(tag);
        packager
    }

    /// The `JSON` packager used by every message this crate writes
    pub fn json() -> Self {
        Self::new(PackagerKind::Json.name())
    }

    pub fn from_bytes(bytes: [u8; PACKAGER_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PACKAGER_LEN] {
        &self.0
    }

    /// Store up to 8 bytes of `tag`, zero-filling the remainder.
    ///
    /// Longer tags are truncated without error.
    pub fn set(&mut self, tag: &str) {
        fill_fixed(&mut self.0, tag.as_bytes());
    }

    /// Prefix comparison bounded by `min(8, tag.len())`.
    ///
    /// Trailing zero bytes of the stored tag are never compared.
    pub fn equal(&self, tag: &str) -> bool {
        self.0
            .iter()
            .zip(tag.as_bytes())
            .all(|(stored, wanted)| stored == wanted)
    }

    /// Tag text up to the first NUL byte
    pub fn name(&self) -> String {
        fixed_str(&self.0)
    }

    /// Recognise one of the well-known packager names
    pub fn kind(&self) -> Option<PackagerKind> {
        let name = self.name();
        [PackagerKind::Json, PackagerKind::Php, PackagerKind::Msgpack]
            .into_iter()
            .find(|kind| name == kind.name())
    }
}

impl fmt::Display for Packager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<PackagerKind> for Packager {
    fn from(kind: PackagerKind) -> Self {
        Self::new(kind.name())
    }
}

/// Copy `src` into `dst` left-aligned, truncating and zero-filling as needed
pub(crate) fn fill_fixed(dst: &mut [u8], src: &[u8]) {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    dst[n..].fill(0);
}

/// Text of a fixed-width field up to the first NUL byte
pub(crate) fn fixed_str(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
