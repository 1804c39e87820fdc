use std::io::Read;

use byteorder::ByteOrder;

use super::Error;

/// Field decoding on top of any `Read` source. Multi-byte integers honor the
/// byte order `O` picked at magic detection; a short read surfaces as
/// [`Error::Truncated`] rather than a bare io error.
pub trait ReadExt {
    fn read_tag(&mut self) -> Result<[u8; 4], Error>;
    fn read_len(&mut self, len: usize, what: &'static str) -> Result<Vec<u8>, Error>;
    fn read_name(&mut self, max: usize) -> Result<Vec<u8>, Error>;
    fn read_u16<O: ByteOrder>(&mut self, what: &'static str) -> Result<u16, Error>;
    fn read_u32<O: ByteOrder>(&mut self, what: &'static str) -> Result<u32, Error>;
}

impl<R: std::io::Read> ReadExt for R {
    fn read_tag(&mut self) -> Result<[u8; 4], Error> {
        let mut tag = [0; 4];
        self.read_exact(&mut tag).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::Truncated("magic tag"),
            _ => Error::Io(e),
        })?;
        Ok(tag)
    }

    fn read_len(&mut self, len: usize, what: &'static str) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::with_capacity(len);
        self.take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(Error::Truncated(what));
        }
        Ok(buf)
    }

    /// Reads up to `max` bytes and returns the prefix before the first null.
    /// A name may be cut short by end of source only if the terminator was
    /// seen; `max` bytes without a terminator yield the whole buffer,
    /// matching the legacy tools.
    fn read_name(&mut self, max: usize) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::with_capacity(max);
        self.take(max as u64).read_to_end(&mut buf)?;
        match buf.iter().position(|&b| b == 0) {
            Some(null) => {
                buf.truncate(null);
                Ok(buf)
            }
            None if buf.len() == max => Ok(buf),
            None => Err(Error::Truncated("file name")),
        }
    }

    fn read_u16<O: ByteOrder>(&mut self, what: &'static str) -> Result<u16, Error> {
        Ok(O::read_u16(&self.read_len(2, what)?))
    }

    fn read_u32<O: ByteOrder>(&mut self, what: &'static str) -> Result<u32, Error> {
        Ok(O::read_u32(&self.read_len(4, what)?))
    }
}
