use byteorder::{ByteOrder, BE, LE};
use std::io::{Read, Seek, SeekFrom, Write};

use super::entry::{Entry, FileRecord, ENTRY_SIZE, MAX_NAME_LEN};
use super::ext::ReadExt;
use super::header::Header;
use super::{Endianness, Error, Version, MAGIC};

/// An opened LPAK bundle.
///
/// Construction performs the whole parse in one pass: endianness detection
/// from the magic tag, version check, header tables, then the entry-table
/// walk with sequential name resolution. After that the record list is
/// final; the reader is only touched again to serve payload reads.
#[derive(Debug)]
pub struct LpakReader<R> {
    reader: R,
    endianness: Endianness,
    version: Version,
    records: Vec<FileRecord>,
}

impl<R: Read + Seek> LpakReader<R> {
    pub fn new(mut reader: R) -> Result<Self, Error> {
        reader.seek(SeekFrom::Start(0))?;
        let tag = reader.read_tag()?;
        let endianness = if tag == MAGIC {
            Endianness::Big
        } else if tag == reversed(MAGIC) {
            Endianness::Little
        } else {
            return Err(Error::Magic(tag));
        };
        match endianness {
            Endianness::Big => Self::parse::<BE>(reader, endianness),
            Endianness::Little => Self::parse::<LE>(reader, endianness),
        }
    }

    fn parse<O: ByteOrder>(mut reader: R, endianness: Endianness) -> Result<Self, Error> {
        reader.seek(SeekFrom::Start(6))?;
        let raw_version = reader.read_u16::<O>("version")?;
        let version = Version::from_raw(raw_version);
        if version == Version::PostFullThrottle {
            return Err(Error::Version(raw_version));
        }

        let header = Header::read::<_, O>(&mut reader)?;
        let mut records = Vec::with_capacity(header.num_files() as usize);
        // Names are consumed sequentially in entry order; each entry's own
        // name_offset field is ignored. See FileRecord::filename.
        let mut current_name_offset = 0u64;
        for i in 0..header.num_files() {
            reader.seek(SeekFrom::Start(
                header.start_of_file_entries as u64 + i as u64 * ENTRY_SIZE as u64,
            ))?;
            let entry = Entry::read::<_, O>(&mut reader)?;
            reader.seek(SeekFrom::Start(
                header.start_of_file_names as u64 + current_name_offset,
            ))?;
            let name = reader.read_name(MAX_NAME_LEN)?;
            current_name_offset += name.len() as u64 + 1;
            records.push(FileRecord {
                offset: entry.offset as u64 + header.start_of_data as u64,
                size: entry.size,
                compressed_size: entry.compressed_size,
                compressed: entry.compressed,
                filename: String::from_utf8(name)?,
            });
        }

        Ok(Self {
            reader,
            endianness,
            version,
            records,
        })
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Records in entry-table order. Order carries no meaning but is kept
    /// stable for reproducible listings.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn read_payload(&mut self, record: &FileRecord) -> Result<Vec<u8>, Error> {
        let mut data = Vec::new();
        self.read_payload_to(record, &mut data)?;
        Ok(data)
    }

    /// Streams the raw payload of `record` into `writer`. Compressed records
    /// are refused rather than handed out as opaque bytes.
    pub fn read_payload_to<W: Write>(
        &mut self,
        record: &FileRecord,
        writer: &mut W,
    ) -> Result<(), Error> {
        if record.compressed {
            return Err(Error::CompressedPayload(record.filename.clone()));
        }
        self.reader.seek(SeekFrom::Start(record.offset))?;
        let data = self.reader.read_len(record.size as usize, "file payload")?;
        writer.write_all(&data)?;
        Ok(())
    }
}

fn reversed(tag: [u8; 4]) -> [u8; 4] {
    let mut rev = tag;
    rev.reverse();
    rev
}
