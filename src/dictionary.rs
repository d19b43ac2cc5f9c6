//! Dictionary loading.
//!
//! A dictionary file is a TOML or JSON document with a top-level `entries`
//! table mapping words to string values:
//!
//! ```toml
//! [entries]
//! "a" = "first"
//! "ab" = "second"
//! ```
//!
//! Every entry is registered into a [`PrefixTrie<String>`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data_structures::PrefixTrie;
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// On-disk format of a dictionary file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl DictionaryFormat {
    /// Infers the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// A set of words and their values, loaded into a prefix trie.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: PrefixTrie<String>,
}

impl Dictionary {
    /// Parses dictionary text in the given format.
    ///
    /// # Returns
    ///
    /// * `Ok(Dictionary)` - The parsed dictionary
    /// * `Err(DictionaryError::Parse)` - If the text is malformed
    pub fn parse(text: &str, format: DictionaryFormat) -> DictionaryResult<Self> {
        let file: DictionaryFile = match format {
            DictionaryFormat::Toml => toml::from_str(text).map_err(|e| DictionaryError::Parse {
                format,
                message: e.to_string(),
            })?,
            DictionaryFormat::Json => {
                serde_json::from_str(text).map_err(|e| DictionaryError::Parse {
                    format,
                    message: e.to_string(),
                })?
            }
        };

        Ok(Self {
            trie: file.entries.into_iter().collect(),
        })
    }

    /// Loads a dictionary file, inferring its format from the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let format = DictionaryFormat::from_path(path)
            .ok_or_else(|| DictionaryError::UnsupportedFormat(path.to_path_buf()))?;
        Self::load_with_format(path, format)
    }

    /// Loads a dictionary file in an explicitly given format.
    pub fn load_with_format<P: AsRef<Path>>(
        path: P,
        format: DictionaryFormat,
    ) -> DictionaryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), %format, "Reading dictionary");
        let text = fs::read_to_string(path)?;
        let dictionary = Self::parse(&text, format)?;

        tracing::info!(
            path = %path.display(),
            entries = dictionary.len(),
            "Dictionary loaded"
        );
        Ok(dictionary)
    }

    /// The trie holding all entries.
    pub fn trie(&self) -> &PrefixTrie<String> {
        &self.trie
    }

    /// Consumes the dictionary and returns its trie.
    pub fn into_trie(self) -> PrefixTrie<String> {
        self.trie
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Checks if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
