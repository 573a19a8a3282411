/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for INI loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an INI document.
#[derive(Debug, Error)]
pub enum IniError {
    /// The file could not be read.
    #[error("Cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{} is not valid UTF-8 (line {line})", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// A `[` line without its closing `]`.
    #[error("ini: invalid group name '{text}' (line {line})")]
    InvalidGroupName { line: usize, text: String },

    /// An item appeared before the first group header.
    #[error("ini: '{text}' outside of group (line {line})")]
    OutsideGroup { line: usize, text: String },
}

/// Result type for INI operations.
pub type Result<T> = std::result::Result<T, IniError>;
