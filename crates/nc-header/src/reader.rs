//! NetCDF header reader.
//!
//! Drives the header grammar top-down: magic and version, record count,
//! then the dimension, global-attribute and variable lists in fixed order.
//! The parse is all-or-nothing; the only success path builds the [`Header`]
//! after every list has decoded.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cursor::Cursor;
use crate::error::{NcError, Result};
use crate::header::{
    NC_ATTRIBUTE, NC_DIMENSION, NC_VARIABLE, decode_attribute, decode_dimension, decode_variable,
    parse_tagged_list,
};
use crate::types::{Format, Header, MAGIC};

/// NetCDF header reader over any byte source.
///
/// The reader takes the source as a capability to read bytes in sequence;
/// opening and closing the underlying resource stays with the caller. After
/// a failed parse the source is positioned mid-field and should be treated
/// as consumed rather than rewindable.
#[derive(Debug)]
pub struct NcReader<R: Read> {
    cursor: Cursor<BufReader<R>>,
}

impl<R: Read> NcReader<R> {
    /// Create a reader over a byte source.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(BufReader::new(reader)),
        }
    }

    /// Parse the header, consuming the reader.
    ///
    /// Returns either a fully populated [`Header`] or exactly one error;
    /// never a partial result.
    pub fn read_header(mut self) -> Result<Header> {
        parse_from_cursor(&mut self.cursor)
    }
}

impl NcReader<File> {
    /// Open a NetCDF file for header reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NcError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                NcError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read the header of a NetCDF file at `path`.
///
/// Convenience wrapper over [`NcReader::open`].
pub fn read_header(path: &Path) -> Result<Header> {
    NcReader::open(path)?.read_header()
}

/// Parse a header from an in-memory buffer.
///
/// Trailing bytes after the variable list (the data blocks) are ignored.
pub fn parse_header(data: &[u8]) -> Result<Header> {
    NcReader::new(data).read_header()
}

fn parse_from_cursor<R: Read>(cursor: &mut Cursor<R>) -> Result<Header> {
    let magic = cursor.read_bytes(4)?;
    if magic[..3] != MAGIC {
        return Err(NcError::bad_magic([magic[0], magic[1], magic[2]]));
    }
    let format = Format::from_version_byte(magic[3])
        .ok_or(NcError::UnsupportedFormat { version: magic[3] })?;

    let num_recs = cursor.read_u32()?;

    let dimensions = parse_tagged_list(cursor, "dimension", NC_DIMENSION, decode_dimension)?;
    let attributes = parse_tagged_list(cursor, "attribute", NC_ATTRIBUTE, decode_attribute)?;
    let variables = parse_tagged_list(cursor, "variable", NC_VARIABLE, |c| {
        decode_variable(c, format)
    })?;

    Ok(Header {
        format,
        num_recs,
        dimensions,
        attributes,
        variables,
    })
}
