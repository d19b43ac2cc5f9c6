//! Prefix Matcher Library
//!
//! Longest-prefix matching over sequences of Unicode code points. The core is
//! [`data_structures::PrefixTrie`]: register words with values, then ask for
//! the value of the longest registered word that an input starts with.
//!
//! Around the trie the library provides a thread-shareable wrapper, loading of
//! word lists from TOML or JSON files, layered configuration and logging setup
//! for the `prefix_matcher` command-line tool.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixMatch, PrefixTrie, Segment, SharedPrefixTrie};

/// Version information for the prefix matcher.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
