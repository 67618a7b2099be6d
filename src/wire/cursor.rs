use alloc::vec::Vec;
use byteorder::{ByteOrder, NetworkEndian};

use super::{Error, Result};

/// A read cursor over a borrowed octet buffer.
///
/// Every read either consumes exactly the requested number of octets or fails with
/// [`Error::TruncatedInput`] without moving the cursor.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buffer: &'a [u8],
    index: usize,
}

impl<'a> Reader<'a> {
    pub const fn new(buffer: &'a [u8]) -> Reader<'a> {
        Reader { buffer, index: 0 }
    }

    /// Return the number of octets not yet consumed.
    pub fn len_remaining(&self) -> usize {
        self.buffer.len() - self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len_remaining() == 0
    }

    /// Return the position of the cursor from the start of the buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read one octet.
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self.buffer.get(self.index).ok_or(Error::TruncatedInput)?;
        self.index += 1;
        Ok(byte)
    }

    /// Read a 16-bit integer in network byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_exact(2).map(NetworkEndian::read_u16)
    }

    /// Read the next `len` octets, without copying them.
    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.len_remaining() {
            return Err(Error::TruncatedInput);
        }
        let data = &self.buffer[self.index..self.index + len];
        self.index += len;
        Ok(data)
    }

    /// Read exactly `N` octets into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_exact(N)?);
        Ok(array)
    }

    /// Return every octet not yet consumed. The cursor does not move.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.index..]
    }
}

/// An append-only write cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    pub const fn new() -> Writer {
        Writer { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Writer {
        Writer {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value)
    }

    /// Write a 16-bit integer in network byte order.
    pub fn write_u16(&mut self, value: u16) {
        let mut field = [0; 2];
        NetworkEndian::write_u16(&mut field, value);
        self.buffer.extend_from_slice(&field)
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data)
    }

    /// Return the number of octets written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the cursor, returning the octets written.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_fixed_width() {
        let mut reader = Reader::new(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(reader.read_u8(), Ok(0x01));
        assert_eq!(reader.read_u16(), Ok(0x0203));
        assert_eq!(reader.len_remaining(), 2);
        assert_eq!(reader.index(), 3);
        assert_eq!(reader.remaining(), &[0x04, 0x05]);
        assert_eq!(reader.read_exact(2), Ok(&[0x04, 0x05][..]));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_past_end() {
        let mut reader = Reader::new(&[0xaa, 0xbb]);
        assert_eq!(reader.read_exact(3), Err(Error::TruncatedInput));
        // A failed read leaves the cursor where it was.
        assert_eq!(reader.len_remaining(), 2);
        assert_eq!(reader.read_array::<2>(), Ok([0xaa, 0xbb]));
        assert_eq!(reader.read_u8(), Err(Error::TruncatedInput));
        assert_eq!(reader.read_u16(), Err(Error::TruncatedInput));
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn test_read_empty() {
        let mut reader = Reader::new(&[]);
        assert_eq!(reader.read_exact(0), Ok(&[][..]));
        assert_eq!(reader.read_u8(), Err(Error::TruncatedInput));
    }

    #[test]
    fn test_write() {
        let mut writer = Writer::new();
        assert!(writer.is_empty());
        writer.write_u8(0x0c);
        writer.write_u16(0x0027);
        writer.write_bytes(b"ab");
        assert_eq!(writer.len(), 5);
        assert_eq!(writer.as_bytes(), &[0x0c, 0x00, 0x27, b'a', b'b']);
        assert_eq!(writer.into_inner(), [0x0c, 0x00, 0x27, b'a', b'b']);
    }
}
