//! Attribute list entries.

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::Attribute;

/// Decode one attribute entry: name, type code, then the opaque value
/// payload with its alignment padding.
///
/// The value bytes are stored verbatim alongside the type code; decoding
/// them into typed values belongs to a later layer.
pub fn decode_attribute<R: Read>(cursor: &mut Cursor<R>) -> Result<Attribute> {
    let name = cursor.read_text()?;
    let type_code = cursor.read_u32()?;
    let len = cursor.read_u32()? as usize;
    let values = cursor.read_padded_bytes(len)?;
    Ok(Attribute {
        name,
        type_code,
        values,
    })
}
