// src/project.rs
//! Project root resolution and the per-file flags hook.

#![deny(missing_docs)]

use crate::config::{CONFIG_FILE, Config};
use crate::discover::{Discover, ScanOptions, absolute_path};
use crate::error::FlagsError;
use crate::flags::{Language, flags_for_extension};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What the completion engine gets back for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsResult {
    /// Language flags followed by include flags.
    pub flags: Vec<String>,
    /// Whether the caller may reuse this result. Always true.
    pub do_cache: bool,
}

/// Turn a directory into an include-path flag.
pub fn include_flag(dir: &Path) -> String {
    format!("-I{}", dir.display())
}

/// A project rooted at the directory holding its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
    scan: ScanOptions,
}

impl Project {
    /// Open the project rooted at `root`, reading its config if present.
    pub fn at(root: &Path) -> FlagsError<Self> {
        let root = absolute_path(root)
            .with_context(|| format!("cannot resolve project root {}", root.display()))?;
        let config = Config::load_or_default(&root)?;
        Self::with_config(root, config)
    }

    /// Build a project from an already loaded config.
    pub fn with_config(root: PathBuf, config: Config) -> FlagsError<Self> {
        let scan = ScanOptions::new(config.exclude.as_slice(), config.respect_gitignore)?;
        Ok(Self { root, config, scan })
    }

    /// Find the project owning `start`: the nearest ancestor (or `start`
    /// itself) holding a config file. Without one, `start` is the root.
    pub fn locate(start: &Path) -> FlagsError<Self> {
        let start = absolute_path(start)
            .with_context(|| format!("cannot resolve {}", start.display()))?;
        let first = if start.is_file() {
            start.parent().unwrap_or(&start)
        } else {
            &start
        };
        let root = first
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .unwrap_or(first);
        debug!("project root: {}", root.display());
        Self::at(root)
    }

    /// Absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configured include directory names.
    pub fn set_include_dirs(&mut self, names: Vec<String>) {
        self.config.include_dirs = names;
    }

    /// Compute the flags for `filename`.
    ///
    /// The filename is only classified by extension, so it need not exist or
    /// live under the root. Never fails.
    pub fn flags_for_file(&self, filename: impl AsRef<Path>) -> FlagsResult {
        let filename = filename.as_ref();
        let includes =
            Discover::header_dirs_with(&self.root, self.config.include_dirs.as_slice(), &self.scan);

        let mut flags = flags_for_extension(filename);
        if Language::from_path(filename).is_some() {
            flags.extend(self.config.extra_flags.iter().cloned());
        }
        flags.extend(includes.iter().map(|d| include_flag(d)));

        info!(
            "{}: {} flags, {} include dirs",
            filename.display(),
            flags.len(),
            includes.len()
        );
        FlagsResult {
            flags,
            do_cache: true,
        }
    }
}
