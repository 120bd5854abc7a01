//! NetCDF classic header grammar decoding.
//!
//! The header is a tag-delimited, length-prefixed, four-byte-aligned binary
//! grammar (all integers big-endian):
//!
//! ```text
//! magic      3 bytes   ASCII "CDF"
//! version    1 byte    0x01 classic, 0x02 64-bit offset
//! numrecs    4 bytes   u32
//! dim_list   tag(0x0A) count  dim  * count     (absent: two zero words)
//!   dim      name  length(u32)
//! gatt_list  tag(0x0C) count  attr * count
//! var_list   tag(0x0B) count  var  * count
//!   var      name  ndims(u32)  dimid(u32)*ndims  attr_list
//!            type(u32)  vsize(u32)  offset(u32 | u64)
//! attr       name  type(u32)  nbytes(u32)  bytes[nbytes]  pad
//! name       length(u32)  bytes[length]  pad
//! pad        (4 - len % 4) % 4 zero bytes
//! ```
//!
//! The three list forms are structurally identical, so a single tagged-list
//! routine decodes all of them; only the tag constant and the per-item
//! decoder differ. Each variable embeds its own attribute list, decoded by
//! the same routine with the same attribute decoder.

mod attribute;
mod dimension;
mod list;
mod variable;

pub use attribute::decode_attribute;
pub use dimension::decode_dimension;
pub use list::{NC_ATTRIBUTE, NC_DIMENSION, NC_VARIABLE, parse_tagged_list};
pub use variable::decode_variable;
