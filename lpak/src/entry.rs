use byteorder::ByteOrder;
use std::io::Read;

use super::ext::ReadExt;
use super::Error;

/// Each entry-table record is exactly this many bytes: five u32 fields.
pub(crate) const ENTRY_SIZE: u32 = 20;

/// Names never exceed this many raw bytes before their null terminator.
pub(crate) const MAX_NAME_LEN: usize = 255;

/// One raw 20-byte record from the entry table.
#[derive(Debug)]
pub(crate) struct Entry {
    pub offset: u32,
    /// Present in the format but never consulted: names are resolved from a
    /// running cursor into the name table, in entry order. See
    /// [`FileRecord::filename`].
    #[allow(dead_code)]
    pub name_offset: u32,
    pub size: u32,
    pub compressed_size: u32,
    pub compressed: bool,
}

impl Entry {
    pub fn read<R: Read, O: ByteOrder>(reader: &mut R) -> Result<Self, Error> {
        Ok(Self {
            offset: reader.read_u32::<O>("entry record")?,
            name_offset: reader.read_u32::<O>("entry record")?,
            size: reader.read_u32::<O>("entry record")?,
            compressed_size: reader.read_u32::<O>("entry record")?,
            compressed: reader.read_u32::<O>("entry record")? != 0,
        })
    }
}

/// One packed file, finalized at parse time. Immutable and detached from the
/// bundle source; `offset`/`size` are what a consumer needs to re-read the
/// payload later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute byte offset of the payload within the bundle
    /// (entry-relative offset plus the data-region base).
    pub offset: u64,
    /// Uncompressed byte length of the stored data.
    pub size: u32,
    /// Stored byte length when `compressed`; otherwise mirrors `size` in
    /// well-formed bundles (not independently verified).
    pub compressed_size: u32,
    /// Nonzero compressed flag in the entry record. Payloads of compressed
    /// records are opaque to this crate.
    pub compressed: bool,
    /// Relative path as stored, forward- or backslash-separated.
    ///
    /// Decoded from the name table by consuming null-terminated strings
    /// sequentially in entry order. The per-entry `name_offset` field is
    /// deliberately ignored to match how the bundles were produced; this
    /// looks like a format quirk but is load-bearing.
    pub filename: String,
}
