//! Buffer utilities for reading TDS token data.
//!
//! TDS encodes integers little-endian and strings as UCS-2LE.

use crate::error::{Error, Result};
use bytes::Bytes;

/// A buffer for reading TDS token data.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[track_caller]
    fn ensure(&self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::BufferTooSmall {
                needed: n,
                available: self.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        Ok(())
    }

    /// Skip `n` bytes.
    #[track_caller]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a single byte.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Read a little-endian u16.
    #[track_caller]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    /// Read a little-endian u32.
    #[track_caller]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Read a B_VARCHAR: a one-byte character count followed by UCS-2LE text.
    ///
    /// Unpaired surrogates are replaced rather than rejected.
    #[track_caller]
    pub fn read_b_varchar(&mut self) -> Result<String> {
        let chars = self.read_u8()? as usize;
        let raw = self.read_bytes(chars * 2)?;
        let units = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        Ok(char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ucs2(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    #[test]
    fn test_read_integers_little_endian() {
        let mut buf = ReadBuffer::new(Bytes::from_static(&[0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12]));
        assert_eq!(buf.read_u8().unwrap(), 1);
        assert_eq!(buf.read_u16_le().unwrap(), 0x1234);
        assert_eq!(buf.read_u32_le().unwrap(), 0x1234_5678);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_read_b_varchar() {
        let mut data = vec![5u8];
        data.extend(ucs2("héllo"));
        data.push(0xAA);
        let mut buf = ReadBuffer::new(Bytes::from(data));

        assert_eq!(buf.read_b_varchar().unwrap(), "héllo");
        assert_eq!(buf.position(), 11);
        assert_eq!(buf.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn test_read_empty_b_varchar() {
        let mut buf = ReadBuffer::new(Bytes::from_static(&[0]));
        assert_eq!(buf.read_b_varchar().unwrap(), "");
    }

    #[test]
    fn test_underrun() {
        let mut buf = ReadBuffer::new(Bytes::from_static(&[0x01]));
        match buf.read_u16_le() {
            Err(Error::BufferTooSmall {
                needed, available, ..
            }) => {
                assert_eq!(needed, 2);
                assert_eq!(available, 1);
            }
            other => panic!("Expected BufferTooSmall error, got {:?}", other),
        }
        // A failed read does not advance.
        assert_eq!(buf.position(), 0);
        assert!(buf.skip(2).is_err());
        assert!(buf.skip(1).is_ok());
    }
}
