//! CLI argument parser for ycm-flags.

#![deny(missing_docs)]

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute C/C++ compilation flags for a file.
#[derive(Parser, Debug)]
#[command(
    name = "ycm-flags",
    version,
    about = "Compute C/C++ compilation flags and include paths for a file"
)]
pub struct Cli {
    /// Set verbosity level: -v=1, -v=2, -v=3
    #[arg(
        short = 'v',
        long = "verbose",
        value_name = "LEVEL",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    pub verbose: u8,

    /// Silence all logging (overrides -v).
    #[arg(short, long)]
    pub quiet: bool,

    /// Project root. Defaults to the nearest directory holding `.ycm-flags.toml`.
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only use directories with this name as include paths (repeatable).
    #[arg(short = 'd', long = "include-dir", value_name = "NAME")]
    pub include_dirs: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// The file to get compilation flags for. Exactly one is expected; put
    /// `--` before a name that starts with `-`.
    #[arg(value_name = "FILENAME")]
    pub files: Vec<PathBuf>,
}

/// How the result is written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `{"flags": [...], "do_cache": true}`
    Json,
    /// One flag per line.
    Lines,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
