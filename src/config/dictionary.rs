//! Dictionary configuration module.
//!
//! Names the word list the command-line tool loads into its trie.

use super::ConfigResult;
use super::Validate;
use crate::dictionary::{Dictionary, DictionaryFormat, DictionaryResult};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dictionary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to the dictionary file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// File format; inferred from the extension of `path` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DictionaryFormat>,
}

impl DictionaryConfig {
    /// Resolves the format to parse `path` with.
    ///
    /// An explicit `format` wins over the file extension.
    pub fn format_for(&self, path: &Path) -> Option<DictionaryFormat> {
        self.format.or_else(|| DictionaryFormat::from_path(path))
    }

    /// Loads the dictionary at `path` with the configured format.
    pub fn load(&self, path: &Path) -> DictionaryResult<Dictionary> {
        match self.format {
            Some(format) => Dictionary::load_with_format(path, format),
            None => Dictionary::load(path),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary.path cannot be empty".to_string(),
                ));
            }

            if self.format_for(path).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "Cannot infer dictionary format for {path:?}; set dictionary.format"
                )));
            }
        }

        Ok(())
    }
}
