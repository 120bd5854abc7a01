//! CLI argument definitions for the header inspector.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ncinfo",
    version,
    about = "Inspect NetCDF classic file headers",
    long_about = "Print the header metadata of a NetCDF classic (CDF-1) or\n\
                  64-bit-offset (CDF-2) file: format, record count, dimensions,\n\
                  global attributes and variables. Variable data is never read."
)]
pub struct Cli {
    /// Path to the NetCDF file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skip the global and per-variable attribute output.
    #[arg(long = "no-attributes")]
    pub no_attributes: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_file_argument() {
        let cli = Cli::try_parse_from(["ncinfo", "ocean.nc"]).expect("parse");
        assert_eq!(cli.file, PathBuf::from("ocean.nc"));
        assert!(!cli.no_attributes);
    }

    #[test]
    fn test_requires_file_argument() {
        assert!(Cli::try_parse_from(["ncinfo"]).is_err());
    }
}
