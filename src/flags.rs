// src/flags.rs
//! Per-language compiler flag tables.

#![deny(missing_docs)]

use std::path::Path;

const C_FLAGS: &[&str] = &[
    "-xc",
    "-g",
    "-Wall",
    "-Wextra",
    "-Werror",
    "-std=c11",
    "-pedantic",
    "-fstrict-aliasing",
    "-Wcast-align=strict",
    "-O3",
];

const CXX_FLAGS: &[&str] = &[
    "-xc++",
    "-g",
    "-Wall",
    "-Wextra",
    "-Werror",
    "-std=c++11",
    "-pedantic",
    "-fstrict-aliasing",
    "-Wcast-align=strict",
    "-O3",
];

/// Languages with a known flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// C, `.c`.
    C,
    /// C++, any of `.cxx`, `.cpp`, `.cc`.
    Cxx,
}

impl Language {
    /// Classify `path` by its extension. Case-sensitive, so `.C` is unknown.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Language> {
        match path.as_ref().extension().and_then(|s| s.to_str())? {
            "c" => Some(Language::C),
            // all the C++ spellings share one table
            "cxx" | "cpp" | "cc" => Some(Language::Cxx),
            _ => None,
        }
    }

    /// The fixed flag list for this language.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Language::C => C_FLAGS,
            Language::Cxx => CXX_FLAGS,
        }
    }
}

/// Return compiler flags chosen by the extension of `path`.
///
/// C and C++ files get different flag sets. Any other extension, or none,
/// yields an empty list.
pub fn flags_for_extension(path: impl AsRef<Path>) -> Vec<String> {
    Language::from_path(path)
        .map(|lang| lang.flags().iter().map(|f| (*f).to_string()).collect())
        .unwrap_or_default()
}
