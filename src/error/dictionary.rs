//! Dictionary error module.
//!
//! Errors raised while reading a word list from disk and registering it into
//! a prefix trie.

use std::path::PathBuf;
use thiserror::Error;

use crate::dictionary::DictionaryFormat;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// The dictionary file exists but could not be read.
    #[error("Failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary file could not be parsed.
    #[error("Failed to parse {format} dictionary: {message}")]
    Parse {
        /// Format the file was parsed as
        format: DictionaryFormat,
        /// Parser message
        message: String,
    },

    /// The file extension does not name a known dictionary format.
    #[error("Unsupported dictionary file format: {0}")]
    UnsupportedFormat(PathBuf),
}
