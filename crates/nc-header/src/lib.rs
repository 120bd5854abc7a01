//! NetCDF classic (CDF-1 / CDF-2) header reader.
//!
//! This crate decodes the header metadata of classic-format NetCDF files
//! directly from raw bytes, without an external format library: format
//! variant, record count, dimensions, global and per-variable attributes,
//! and variable descriptors (name, shape, type code, storage size, data
//! offset).
//!
//! # Features
//!
//! - CDF-1 (classic) and CDF-2 (64-bit offset) variants, including the
//!   widened 8-byte data offsets of CDF-2
//! - One generic tagged-list routine shared by the dimension, attribute
//!   and variable lists, and by each variable's nested attribute list
//! - Parses from any `std::io::Read` source; in-memory buffers need no
//!   real file I/O
//!
//! Variable *data* blocks are not decoded; each variable carries the
//! offset and per-record size needed to locate its data, and everything
//! past the header is left untouched. Attribute values stay opaque bytes
//! alongside their type code.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use nc_header::read_header;
//!
//! let header = read_header(Path::new("ocean.nc")).unwrap();
//! println!("format: {}", header.format);
//! for dim in &header.dimensions {
//!     println!("  {} = {}", dim.name, dim.length);
//! }
//! ```

mod cursor;
mod error;
pub mod header;
mod reader;
mod types;

// Re-export error types
pub use error::{NcError, Result};

// Re-export core types
pub use types::{Attribute, Dimension, Format, Header, MAGIC, STREAMING, Variable};

// Re-export reader functionality
pub use cursor::Cursor;
pub use reader::{NcReader, parse_header, read_header};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
