//! Core types for NetCDF header handling.
//!
//! This module provides the data structures a successful parse produces:
//! the header value itself plus its dimension, attribute and variable
//! entries, and the format discriminator.

mod format;
mod metadata;

pub use format::{Format, MAGIC, STREAMING};
pub use metadata::{Attribute, Dimension, Header, Variable};
