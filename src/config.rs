// src/config.rs
//! Configuration file for ycm-flags

#![deny(missing_docs)]

use crate::error::FlagsError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Name of the per-project configuration file. Its directory is the project root.
pub const CONFIG_FILE: &str = ".ycm-flags.toml";

/// Config struct for ycm-flags.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory basenames to use as include paths. Empty scans for headers.
    pub include_dirs: Vec<String>,
    /// Glob patterns, relative to the project root, skipped while scanning.
    pub exclude: Vec<String>,
    /// Honour `.gitignore` and `.ignore` files while scanning.
    pub respect_gitignore: bool,
    /// Flags placed after the language flags, for recognised languages only.
    pub extra_flags: Vec<String>,
}

impl Config {
    /// Load `.ycm-flags.toml` from `dir` (or its parent if `dir` is a file).
    /// If missing, return defaults.
    pub fn load_or_default(dir: &Path) -> FlagsError<Self> {
        let base = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        let file = base.join(CONFIG_FILE);
        if !file.exists() {
            return Ok(Config::default());
        }
        let s = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let cfg: Config =
            toml::from_str(&s).with_context(|| format!("invalid config {}", file.display()))?;
        Ok(cfg)
    }
}
