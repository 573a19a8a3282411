/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for generation and emission.
//!
//! Every error is fatal for a run: callers propagate it to the top level,
//! which reports it once and exits.

use std::path::PathBuf;
use thiserror::Error;

use settingsgen_ini::IniError;

/// Broad classification of a [`GenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input configuration is unreadable or inconsistent.
    Configuration,
    /// Reading auxiliary files or writing output failed.
    Io,
}

/// Errors that can occur while generating output.
#[derive(Debug, Error)]
pub enum GenError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Ini(#[from] IniError),

    /// A data group has no template with a value.
    #[error("Cannot find template {group}")]
    MissingTemplate { group: String },

    /// A before/after file could not be opened.
    #[error("Cannot open file {} for copying", path.display())]
    OpenCopySource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a before/after file failed midway.
    #[error("Cannot copy file {}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing generated output failed.
    #[error("Cannot write output")]
    Write(#[source] std::io::Error),

    /// The temporary output file could not be created.
    #[error("Cannot open file {}", path.display())]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The freshly generated file could not be reopened for comparison.
    #[error("can't open {}", path.display())]
    OpenGenerated {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving the generated file into place failed.
    #[error("rename({}, {}) failed", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenError::Ini(_) | GenError::MissingTemplate { .. } => ErrorKind::Configuration,
            GenError::OpenCopySource { .. }
            | GenError::Copy { .. }
            | GenError::Write(_)
            | GenError::TempFile { .. }
            | GenError::OpenGenerated { .. }
            | GenError::Rename { .. } => ErrorKind::Io,
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
