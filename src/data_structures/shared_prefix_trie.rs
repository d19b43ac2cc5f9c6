// Copyright (c) 2026 Prefix Matcher Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Thread-shareable handle around [`PrefixTrie`].
//!
//! `PrefixTrie` itself has no interior locking. This wrapper puts one trie
//! behind a reader-writer lock: `register` holds the exclusive write lock,
//! while any number of `seek` calls may run at the same time.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::prefix_trie::PrefixTrie;

/// A cloneable, thread-safe handle to a shared [`PrefixTrie`].
///
/// Clones refer to the same underlying trie. `parking_lot` locks do not
/// poison, so none of the operations can fail.
pub struct SharedPrefixTrie<T> {
    inner: Arc<RwLock<PrefixTrie<T>>>,
}

impl<T> SharedPrefixTrie<T> {
    /// Creates a new handle to an empty trie.
    pub fn new() -> Self {
        Self::from_trie(PrefixTrie::new())
    }

    /// Wraps an already populated trie.
    pub fn from_trie(trie: PrefixTrie<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Registers `word` with `value` under the write lock.
    ///
    /// # Returns
    ///
    /// The value previously registered for exactly `word`, if any.
    pub fn register<W>(&self, word: W, value: T) -> Option<T>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let previous = self.inner.write().register(word, value);
        if previous.is_some() {
            tracing::debug!(word, "Replaced value of registered word");
        }
        previous
    }

    /// Runs `f` on the longest-prefix match for `input` under the read lock.
    ///
    /// Use this when `T` is not `Clone` or copying it is expensive.
    pub fn seek_with<S, F, R>(&self, input: S, f: F) -> R
    where
        S: AsRef<str>,
        F: FnOnce(Option<&T>) -> R,
    {
        let trie = self.inner.read();
        f(trie.seek(input))
    }

    /// Checks if exactly `word` is registered.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().contains(word)
    }

    /// Returns the number of distinct registered words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if no word has been registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<T: Clone> SharedPrefixTrie<T> {
    /// Returns a copy of the value of the longest registered prefix of
    /// `input`, or `None` when there is no match.
    pub fn seek<S>(&self, input: S) -> Option<T>
    where
        S: AsRef<str>,
    {
        self.seek_with(input, |found| found.cloned())
    }

    /// Clones the current content into an unshared trie.
    pub fn snapshot(&self) -> PrefixTrie<T> {
        self.inner.read().clone()
    }
}

impl<T> Clone for SharedPrefixTrie<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedPrefixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<PrefixTrie<T>> for SharedPrefixTrie<T> {
    fn from(trie: PrefixTrie<T>) -> Self {
        Self::from_trie(trie)
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedPrefixTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPrefixTrie")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
