// src/lib.rs
//! ycm-flags library.

#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod flags;
pub mod header;
pub mod project;
