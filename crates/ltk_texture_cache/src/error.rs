//! Error types for cache migration.
//!
//! [`Error`] covers problems that stop a whole run (a directory is missing or
//! cannot be listed). [`EntryError`] covers a single cache entry; the migrator
//! records it on the entry's outcome and moves on.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a migration run.
#[derive(Error, Debug)]
pub enum Error {
    /// One of the input or output directories does not exist.
    #[error("Directory not found: {0}")]
    MissingDirectory(Utf8PathBuf),

    /// The source directory could not be listed.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that fail a single cache entry.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The entry's bytes could not be read from disk.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image container rejected the entry's bytes.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The image container failed to produce bytes for a pixel buffer.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// The decoded pixel data does not match the dimensions in the filename.
    #[error("Decoded image size is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The legacy file is missing or could not be copied.
    #[error("Could not copy '{from}' to '{to}': {source}")]
    Copy {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
