//! The tagged list routine shared by all three header list forms.

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::{NcError, Result};

/// Tag word introducing the dimension list.
pub const NC_DIMENSION: u32 = 0x0A;

/// Tag word introducing the variable list.
pub const NC_VARIABLE: u32 = 0x0B;

/// Tag word introducing an attribute list (global or per-variable).
pub const NC_ATTRIBUTE: u32 = 0x0C;

/// Preallocation cap for list elements; counts are untrusted input.
const MAX_PREALLOC: u32 = 4096;

/// Decode one tagged list: tag word, count word, then `count` items.
///
/// An absent list is encoded as two zero words (tag and count both zero)
/// and yields an empty vector. A nonzero tag other than `expected` is a
/// structural mismatch and aborts the parse, as does the first failing
/// item. Items are appended in read order.
///
/// `kind` names the list position in error messages.
pub fn parse_tagged_list<R, T, F>(
    cursor: &mut Cursor<R>,
    kind: &'static str,
    expected: u32,
    mut decode_item: F,
) -> Result<Vec<T>>
where
    R: Read,
    F: FnMut(&mut Cursor<R>) -> Result<T>,
{
    let tag = cursor.read_u32()?;
    let count = cursor.read_u32()?;

    if tag == 0 {
        // The absent marker is ZERO ZERO; a lone zero word followed by a
        // nonzero count is not a valid encoding.
        if count != 0 {
            return Err(NcError::structural_mismatch(kind, 0, count));
        }
        return Ok(Vec::new());
    }

    if tag != expected {
        return Err(NcError::structural_mismatch(kind, expected, tag));
    }

    let mut items = Vec::with_capacity(count.min(MAX_PREALLOC) as usize);
    for _ in 0..count {
        items.push(decode_item(cursor)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_item<R: Read>(cursor: &mut Cursor<R>) -> Result<u32> {
        cursor.read_u32()
    }

    #[test]
    fn test_absent_list_is_empty() {
        let data = [0u8; 8];
        let mut cursor = Cursor::new(&data[..]);
        let items = parse_tagged_list(&mut cursor, "dimension", NC_DIMENSION, u32_item).unwrap();
        assert!(items.is_empty());
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_absent_list_with_nonzero_count_fails() {
        let data = [0, 0, 0, 0, 0, 0, 0, 2];
        let mut cursor = Cursor::new(&data[..]);
        let err = parse_tagged_list(&mut cursor, "dimension", NC_DIMENSION, u32_item).unwrap_err();
        assert!(matches!(
            err,
            NcError::StructuralMismatch {
                kind: "dimension",
                expected: 0,
                found: 2,
            }
        ));
    }

    #[test]
    fn test_items_decoded_in_order() {
        let data = [
            0, 0, 0, 0x0A, // tag
            0, 0, 0, 3, // count
            0, 0, 0, 7, 0, 0, 0, 8, 0, 0, 0, 9,
        ];
        let mut cursor = Cursor::new(&data[..]);
        let items = parse_tagged_list(&mut cursor, "dimension", NC_DIMENSION, u32_item).unwrap();
        assert_eq!(items, vec![7, 8, 9]);
    }

    #[test]
    fn test_wrong_tag_fails() {
        let data = [0, 0, 0, 0x0D, 0, 0, 0, 1];
        let mut cursor = Cursor::new(&data[..]);
        let err = parse_tagged_list(&mut cursor, "variable", NC_VARIABLE, u32_item).unwrap_err();
        assert!(matches!(
            err,
            NcError::StructuralMismatch {
                kind: "variable",
                expected: NC_VARIABLE,
                found: 0x0D,
            }
        ));
    }

    #[test]
    fn test_item_failure_aborts_list() {
        // Count promises two items but only one is present.
        let data = [0, 0, 0, 0x0A, 0, 0, 0, 2, 0, 0, 0, 7];
        let mut cursor = Cursor::new(&data[..]);
        let err = parse_tagged_list(&mut cursor, "dimension", NC_DIMENSION, u32_item).unwrap_err();
        assert!(matches!(err, NcError::TruncatedRead { .. }));
    }

    #[test]
    fn test_truncated_tag_word() {
        let data = [0, 0];
        let mut cursor = Cursor::new(&data[..]);
        let err = parse_tagged_list(&mut cursor, "dimension", NC_DIMENSION, u32_item).unwrap_err();
        assert!(matches!(err, NcError::TruncatedRead { .. }));
    }
}
