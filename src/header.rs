// src/header.rs
//! Header file classification.

#![deny(missing_docs)]

use std::path::Path;

/// Extensions (without the leading dot) that mark a header file.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx"];

/// True if `path` has an acceptable header file extension.
///
/// Only the name is inspected; the file does not need to exist.
pub fn is_header_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_header_extension() {
        for name in ["a.h", "b.hh", "c.hpp", "d.hxx", "dir/sub/e.hpp"] {
            assert!(is_header_file(name), "{name} should be a header");
        }
    }

    #[test]
    fn rejects_sources_and_extensionless_names() {
        for name in ["a.c", "b.cpp", "c.cc", "README", "Makefile", "x.H", "x.hpp.bak", ""] {
            assert!(!is_header_file(name), "{name} should not be a header");
        }
    }

    #[test]
    fn dotfile_named_like_an_extension_is_not_a_header() {
        assert!(!is_header_file(".h"));
        assert!(!is_header_file("include/.hpp"));
    }
}
