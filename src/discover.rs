// src/discover.rs
//! Include directory discovery.

#![deny(missing_docs)]

use crate::error::FlagsError;
use crate::header::is_header_file;
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Knobs for a directory scan beyond the root and the wanted names.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    exclude: GlobSet,
    respect_gitignore: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude: GlobSet::empty(),
            respect_gitignore: false,
        }
    }
}

impl ScanOptions {
    /// Compile `exclude` globs (matched against root-relative paths).
    pub fn new<S: AsRef<str>>(exclude: &[S], respect_gitignore: bool) -> FlagsError<Self> {
        let mut builder = GlobSetBuilder::new();
        for pat in exclude {
            let pat = pat.as_ref();
            builder.add(Glob::new(pat).with_context(|| format!("invalid exclude glob: {pat}"))?);
        }
        Ok(Self {
            exclude: builder.build()?,
            respect_gitignore,
        })
    }
}

/// Make `path` absolute and drop `.` and `..` components without touching
/// the filesystem, so symlinks are left unresolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    let mut out = PathBuf::new();
    for comp in abs.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at `/`
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Discover struct to keep
pub struct Discover();

impl Discover {
    /// Get the directories to use as include paths under `root`.
    ///
    /// When `names` is non-empty only directories whose basename is one of
    /// `names` are returned and files are never looked at. Otherwise every
    /// directory directly holding at least one header file is returned.
    ///
    /// Paths are absolute and unique. A missing or unreadable root gives an
    /// empty list rather than an error.
    pub fn header_dirs<S: AsRef<str>>(root: &Path, names: &[S]) -> Vec<PathBuf> {
        Self::header_dirs_with(root, names, &ScanOptions::default())
    }

    /// [`Discover::header_dirs`] with exclusions and ignore-file handling.
    pub fn header_dirs_with<S: AsRef<str>>(
        root: &Path,
        names: &[S],
        opts: &ScanOptions,
    ) -> Vec<PathBuf> {
        let root = match absolute_path(root) {
            Ok(p) => p,
            Err(e) => {
                debug!("cannot resolve {}: {e}", root.display());
                return Vec::new();
            }
        };
        // a plain file or an unlistable directory has nothing to walk
        if let Err(e) = fs::read_dir(&root) {
            debug!("cannot list {}: {e}", root.display());
            return Vec::new();
        }
        let names: BTreeSet<&str> = names.iter().map(AsRef::as_ref).collect();
        let mut dirs = BTreeSet::new();

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(None);
        if opts.respect_gitignore {
            builder
                .ignore(true)
                .git_ignore(true)
                .git_exclude(true)
                .parents(true)
                .require_git(false);
        }
        if !opts.exclude.is_empty() {
            let exclude = opts.exclude.clone();
            let base = root.clone();
            builder.filter_entry(move |dent| {
                let rel = dent.path().strip_prefix(&base).unwrap_or(dent.path());
                rel.as_os_str().is_empty() || !exclude.is_match(rel)
            });
        }

        for res in builder.build() {
            let dent = match res {
                Ok(d) => d,
                Err(e) => {
                    debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            let Some(ft) = dent.file_type() else {
                continue;
            };

            if !names.is_empty() {
                let wanted = dent
                    .path()
                    .file_name()
                    .and_then(|s| s.to_str())
                    .is_some_and(|base| names.contains(base));
                // a directory that cannot be listed is never reported
                if ft.is_dir() && wanted && fs::read_dir(dent.path()).is_ok() {
                    dirs.insert(dent.into_path());
                }
            } else if (ft.is_file() || (ft.is_symlink() && !dent.path().is_dir()))
                && is_header_file(dent.path())
                && let Some(parent) = dent.path().parent()
            {
                dirs.insert(parent.to_path_buf());
            }
        }

        for d in &dirs {
            debug!("include dir: {}", d.display());
        }
        dirs.into_iter().collect()
    }
}
