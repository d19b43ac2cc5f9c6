// Copyright (c) 2026 Prefix Matcher Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Data structures for prefix matching.
//!
//! The core is [`PrefixTrie`], a single-threaded trie keyed by Unicode code
//! points. [`SharedPrefixTrie`] wraps it for use from several threads.

pub mod prefix_trie;
pub mod shared_prefix_trie;

// Re-export common data structures
pub use prefix_trie::{PrefixMatch, PrefixTrie, Segment};
pub use shared_prefix_trie::SharedPrefixTrie;
