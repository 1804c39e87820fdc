use byteorder::ByteOrder;
use std::io::{Read, Seek, SeekFrom};

use super::entry::ENTRY_SIZE;
use super::ext::ReadExt;
use super::Error;

/// Raw version values at or above this mark the post-Full Throttle table
/// layout, which this crate does not implement.
pub(crate) const VERSION_CUTOFF: u16 = 16320;

/// Bundle revision, from the u16 at byte offset 6.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
pub enum Version {
    PreFullThrottle,
    PostFullThrottle,
}

impl Version {
    pub(crate) fn from_raw(raw: u16) -> Self {
        if raw >= VERSION_CUTOFF {
            Version::PostFullThrottle
        } else {
            Version::PreFullThrottle
        }
    }
}

/// Table locations from the seven u32 fields at byte offset 12. Fields 4, 6
/// and 7 are skipped over; nothing in the pre-Full Throttle layout consumes
/// them.
#[derive(Debug)]
pub(crate) struct Header {
    pub start_of_file_entries: u32,
    pub start_of_file_names: u32,
    pub start_of_data: u32,
    pub size_of_file_entries: u32,
}

impl Header {
    pub fn read<R: Read + Seek, O: ByteOrder>(reader: &mut R) -> Result<Self, Error> {
        reader.seek(SeekFrom::Start(12))?;
        let start_of_file_entries = reader.read_u32::<O>("header tables")?;
        let start_of_file_names = reader.read_u32::<O>("header tables")?;
        let start_of_data = reader.read_u32::<O>("header tables")?;
        let _ = reader.read_u32::<O>("header tables")?;
        let size_of_file_entries = reader.read_u32::<O>("header tables")?;
        let _ = reader.read_u32::<O>("header tables")?;
        let _ = reader.read_u32::<O>("header tables")?;
        Ok(Self {
            start_of_file_entries,
            start_of_file_names,
            start_of_data,
            size_of_file_entries,
        })
    }

    /// Entry count is derived from the table size, floor-dividing away any
    /// trailing partial record exactly as the original tools do.
    pub fn num_files(&self) -> u32 {
        self.size_of_file_entries / ENTRY_SIZE
    }
}
