//! Dimension list entries.

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::Dimension;

/// Decode one dimension entry: name followed by its declared length.
///
/// A length of zero marks the record (unlimited) dimension; that and the
/// at-most-one-record-dimension rule are left to the consumer.
pub fn decode_dimension<R: Read>(cursor: &mut Cursor<R>) -> Result<Dimension> {
    let name = cursor.read_text()?;
    let length = cursor.read_u32()?;
    Ok(Dimension { name, length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NcError;

    #[test]
    fn test_decode_dimension() {
        let data = [
            0, 0, 0, 3, b'l', b'a', b't', 0, // name "lat" + pad
            0, 0, 0, 180, // length
        ];
        let mut cursor = Cursor::new(&data[..]);
        let dim = decode_dimension(&mut cursor).unwrap();
        assert_eq!(dim.name, "lat");
        assert_eq!(dim.length, 180);
        assert_eq!(cursor.position(), 12);
    }

    #[test]
    fn test_decode_record_dimension() {
        let data = [0, 0, 0, 4, b't', b'i', b'm', b'e', 0, 0, 0, 0];
        let mut cursor = Cursor::new(&data[..]);
        let dim = decode_dimension(&mut cursor).unwrap();
        assert_eq!(dim.name, "time");
        assert!(dim.is_record());
    }

    #[test]
    fn test_truncated_length_fails() {
        let data = [0, 0, 0, 3, b'l', b'a', b't', 0, 0, 0];
        let mut cursor = Cursor::new(&data[..]);
        assert!(matches!(
            decode_dimension(&mut cursor).unwrap_err(),
            NcError::TruncatedRead { .. }
        ));
    }
}
