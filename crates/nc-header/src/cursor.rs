//! Sequential cursor over a raw byte source.
//!
//! All multi-byte integers in the classic NetCDF header are big-endian, and
//! every variable-length field is zero-padded to a four-byte boundary. The
//! cursor owns the read position: each primitive consumes exactly the bytes
//! its grammar rule specifies, because the next field begins immediately
//! after.

use std::io::{ErrorKind, Read};

use crate::error::{NcError, Result};

/// Forward-only read position over a byte source.
///
/// The cursor tracks the absolute offset consumed so far, so a short read
/// can report where the header ran out. After any failure the underlying
/// source is positioned mid-field and must not be reused.
#[derive(Debug)]
pub struct Cursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read> Cursor<R> {
    /// Wrap a byte source at offset zero.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Absolute byte offset consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Fill `buf` completely or fail.
    ///
    /// A short read maps to [`NcError::TruncatedRead`] with the offset of
    /// the field that could not be completed; other I/O failures pass
    /// through unchanged.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                NcError::TruncatedRead {
                    offset: self.position,
                    needed: buf.len(),
                }
            } else {
                NcError::Io(e)
            }
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read a big-endian unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a big-endian unsigned 64-bit integer.
    ///
    /// Only the 64-bit-offset format uses this width, for variable data
    /// offsets.
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }

    /// Read exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read `len` payload bytes plus their alignment padding.
    ///
    /// Consumes `len + pad_len(len)` bytes; the padding is discarded.
    pub fn read_padded_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let bytes = self.read_bytes(len)?;
        self.skip(pad_len(len))?;
        Ok(bytes)
    }

    /// Read a length-prefixed name and discard its alignment padding.
    ///
    /// Consumes `4 + len + pad_len(len)` bytes in total. The grammar does
    /// not guarantee valid UTF-8 payloads, so invalid sequences are
    /// replaced rather than rejected.
    pub fn read_text(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.read_padded_bytes(len)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Consume and discard `len` bytes (`len` is at most 3).
    fn skip(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        let mut buf = [0u8; 3];
        self.fill(&mut buf[..len])
    }
}

/// Bytes of zero padding needed to align `len` to a four-byte boundary.
pub const fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}
