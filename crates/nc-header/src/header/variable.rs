//! Variable list entries.

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::{Format, Variable};

use super::attribute::decode_attribute;
use super::list::{NC_ATTRIBUTE, parse_tagged_list};

/// Dimension-ID preallocation cap; the declared rank is untrusted input.
const MAX_PREALLOC: u32 = 1024;

/// Decode one variable entry.
///
/// Field order: name, dimension-ID list, nested attribute list, type code,
/// per-record byte size, data offset. The attribute list reuses the shared
/// tagged-list routine with the same decoder the global list uses. The
/// offset field is four bytes under CDF-1 and eight under CDF-2.
pub fn decode_variable<R: Read>(cursor: &mut Cursor<R>, format: Format) -> Result<Variable> {
    let name = cursor.read_text()?;

    let ndims = cursor.read_u32()?;
    let mut dim_ids = Vec::with_capacity(ndims.min(MAX_PREALLOC) as usize);
    for _ in 0..ndims {
        dim_ids.push(cursor.read_u32()?);
    }

    let attributes = parse_tagged_list(cursor, "attribute", NC_ATTRIBUTE, decode_attribute)?;

    let type_code = cursor.read_u32()?;
    let vsize = cursor.read_u32()?;
    let offset = match format {
        Format::Classic => u64::from(cursor.read_u32()?),
        Format::Offset64 => cursor.read_u64()?,
    };

    Ok(Variable {
        name,
        dim_ids,
        attributes,
        type_code,
        vsize,
        offset,
    })
}
