// src/error.rs
//! Error handling for ycm-flags.

#![deny(missing_docs)]

/// FlagsError is alias for anyhow
pub type FlagsError<T> = anyhow::Result<T>;
