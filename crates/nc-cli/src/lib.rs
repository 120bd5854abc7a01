//! CLI library components for the NetCDF header inspector.

pub mod logging;
pub mod summary;
