mod bundle;
mod entry;
mod error;
mod ext;
mod header;

pub use {bundle::*, entry::FileRecord, error::*, header::Version};

/// Magic tag at offset 0. Stored byte-reversed (`KAPL`) in little-endian
/// bundles, so the tag doubles as the byte-order marker.
pub const MAGIC: [u8; 4] = *b"LPAK";

/// Byte order of all multi-byte fields after the magic tag, fixed for the
/// whole bundle at detection time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
pub enum Endianness {
    Big,
    Little,
}
