//! Error types for NetCDF header operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a NetCDF header.
///
/// Every variant is terminal for the parse in progress: no retries, no
/// partial results, no substituted defaults. After any error the byte
/// source is positioned mid-field and must be treated as consumed.
#[derive(Debug, Error)]
pub enum NcError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The first three bytes were not the `CDF` magic.
    #[error("not a NetCDF file: bad magic {found:?}")]
    BadMagic { found: [u8; 3] },

    /// The version byte is neither classic (1) nor 64-bit offset (2).
    #[error("unsupported NetCDF format: {version}")]
    UnsupportedFormat { version: u8 },

    /// A list tag did not match the expected discriminator for its position.
    #[error("invalid {kind} list tag: expected {expected:#x}, found {found:#x}")]
    StructuralMismatch {
        kind: &'static str,
        expected: u32,
        found: u32,
    },

    /// Fewer bytes remained than a field declared.
    #[error("truncated header: needed {needed} more bytes at offset {offset}")]
    TruncatedRead { offset: u64, needed: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for header operations.
pub type Result<T> = std::result::Result<T, NcError>;

impl NcError {
    /// Create a BadMagic error from the first three header bytes.
    pub fn bad_magic(found: [u8; 3]) -> Self {
        Self::BadMagic { found }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(version: u8) -> Self {
        Self::UnsupportedFormat { version }
    }

    /// Create a StructuralMismatch error for a list position.
    pub fn structural_mismatch(kind: &'static str, expected: u32, found: u32) -> Self {
        Self::StructuralMismatch {
            kind,
            expected,
            found,
        }
    }
}
