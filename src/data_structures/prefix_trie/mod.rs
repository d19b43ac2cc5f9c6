// Copyright (c) 2026 Prefix Matcher Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Prefix Trie Implementation
//!
//! This module provides a trie keyed by Unicode code points that answers
//! longest-prefix queries: given an input string, it returns the value of the
//! longest registered word that the input starts with.
//!
//! Traversal is always by `char` (Unicode scalar value), never by byte, so an
//! emoji or a kana character is a single step.
//!
//! # Example
//!
//! ```
//! use prefix_matcher_lib::data_structures::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! trie.register("ab", 1);
//! trie.register("abcd", 2);
//!
//! assert_eq!(trie.seek("abc"), Some(&1));
//! assert_eq!(trie.seek("abcdef"), Some(&2));
//! assert_eq!(trie.seek("a"), None);
//! ```

mod node;

use node::TrieNode;

/// A successful longest-prefix match.
///
/// Carries the matched value together with the length of the matched prefix,
/// both in code points and in UTF-8 bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct PrefixMatch<'t, T> {
    value: &'t T,
    chars: usize,
    bytes: usize,
}

impl<'t, T> PrefixMatch<'t, T> {
    /// The value registered for the matched word.
    pub fn value(&self) -> &'t T {
        self.value
    }

    /// Length of the matched prefix in code points.
    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Length of the matched prefix in UTF-8 bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Returns the matched prefix of `input`.
    ///
    /// `input` should be the string that produced this match; `None` is
    /// returned if the byte length does not fall on a char boundary of it.
    pub fn matched<'s>(&self, input: &'s str) -> Option<&'s str> {
        input.get(..self.bytes)
    }
}

impl<T> Clone for PrefixMatch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrefixMatch<'_, T> {}

/// One piece of a greedy segmentation produced by [`PrefixTrie::segment`].
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'t, 's, T> {
    /// A run of input that is the longest registered word at its position.
    Matched {
        /// The matched slice of the input
        text: &'s str,
        /// The value registered for `text`
        value: &'t T,
    },

    /// A run of input where no non-empty registered word starts.
    Unmatched {
        /// The unmatched slice of the input
        text: &'s str,
    },
}

impl<'t, 's, T> Segment<'t, 's, T> {
    /// The slice of the input covered by this segment.
    pub fn text(&self) -> &'s str {
        match self {
            Segment::Matched { text, .. } | Segment::Unmatched { text } => text,
        }
    }

    /// The matched value, or `None` for an unmatched run.
    pub fn value(&self) -> Option<&'t T> {
        match self {
            Segment::Matched { value, .. } => Some(*value),
            Segment::Unmatched { .. } => None,
        }
    }
}

/// A longest-prefix-match trie over Unicode code points.
///
/// Key features:
/// * Any sequence of code points is a valid word, including the empty one
/// * Re-registering a word overwrites its value
/// * `seek` runs in time proportional to the examined input only
/// * Absence of a match is `None`, never a sentinel of `T`
///
/// The structure has no interior locking. Use
/// [`SharedPrefixTrie`](crate::data_structures::SharedPrefixTrie) to share one
/// instance between threads.
#[derive(Debug, Clone)]
pub struct PrefixTrie<T> {
    /// The root node; terminal iff the empty word was registered
    root: TrieNode<T>,

    /// Number of distinct registered words
    len: usize,
}

impl<T> PrefixTrie<T> {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Registers `word` with `value`.
    ///
    /// Missing nodes along the path are created. If `word` was already
    /// registered its value is replaced.
    ///
    /// # Returns
    ///
    /// The value previously registered for exactly `word`, if any.
    pub fn register<W>(&mut self, word: W, value: T) -> Option<T>
    where
        W: AsRef<str>,
    {
        self.register_chars(word.as_ref().chars(), value)
    }

    /// Registers a word given as a sequence of code points.
    ///
    /// Behaves exactly like [`register`](Self::register).
    pub fn register_chars<I>(&mut self, word: I, value: T) -> Option<T>
    where
        I: IntoIterator<Item = char>,
    {
        let node = word
            .into_iter()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns the value of the longest registered word that is a prefix of
    /// `input`, or `None` when no registered word is.
    pub fn seek<S>(&self, input: S) -> Option<&T>
    where
        S: AsRef<str>,
    {
        self.seek_chars(input.as_ref().chars())
    }

    /// Longest-prefix lookup over a sequence of code points.
    pub fn seek_chars<I>(&self, input: I) -> Option<&T>
    where
        I: IntoIterator<Item = char>,
    {
        self.walk(input).map(|found| found.value)
    }

    /// Like [`seek`](Self::seek), but also reports how much of `input` the
    /// match covers.
    pub fn seek_match<S>(&self, input: S) -> Option<PrefixMatch<'_, T>>
    where
        S: AsRef<str>,
    {
        self.walk(input.as_ref().chars())
    }

    /// Walks from the root and remembers the deepest terminal node seen.
    ///
    /// Stops at the first code point without an edge; there is no
    /// backtracking.
    fn walk<I>(&self, input: I) -> Option<PrefixMatch<'_, T>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = &self.root;
        // The empty word is a prefix of every input.
        let mut best = node.value.as_ref().map(|value| PrefixMatch {
            value,
            chars: 0,
            bytes: 0,
        });

        let mut chars = 0;
        let mut bytes = 0;
        for c in input {
            node = match node.child(c) {
                Some(child) => child,
                None => break,
            };
            chars += 1;
            bytes += c.len_utf8();

            if let Some(value) = node.value.as_ref() {
                best = Some(PrefixMatch {
                    value,
                    chars,
                    bytes,
                });
            }
        }

        best
    }

    /// Splits `input` greedily from left to right into longest matches.
    ///
    /// At each position the longest non-empty registered word is taken. Where
    /// none starts, code points are collected into an unmatched run until a
    /// match is found again. Concatenating the texts of all segments gives
    /// back `input`.
    pub fn segment<'s>(&self, input: &'s str) -> Vec<Segment<'_, 's, T>> {
        let mut segments = Vec::new();
        let mut unmatched_start: Option<usize> = None;
        let mut offset = 0;

        while offset < input.len() {
            let rest = &input[offset..];
            match self.walk(rest.chars()).filter(|found| found.bytes > 0) {
                Some(found) => {
                    if let Some(start) = unmatched_start.take() {
                        segments.push(Segment::Unmatched {
                            text: &input[start..offset],
                        });
                    }
                    segments.push(Segment::Matched {
                        text: &rest[..found.bytes],
                        value: found.value,
                    });
                    offset += found.bytes;
                }
                None => {
                    unmatched_start.get_or_insert(offset);
                    offset += rest.chars().next().map_or(rest.len(), char::len_utf8);
                }
            }
        }

        if let Some(start) = unmatched_start {
            segments.push(Segment::Unmatched {
                text: &input[start..],
            });
        }

        segments
    }

    /// Returns the value registered for exactly `word`.
    pub fn get<W>(&self, word: W) -> Option<&T>
    where
        W: AsRef<str>,
    {
        word.as_ref()
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .and_then(|node| node.value.as_ref())
    }

    /// Checks if exactly `word` is registered.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.get(word).is_some()
    }

    /// Returns the number of distinct registered words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no word has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for PrefixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Extend<(K, T)> for PrefixTrie<T>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (word, value) in iter {
            self.register(word, value);
        }
    }
}

impl<K, T> FromIterator<(K, T)> for PrefixTrie<T>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = PrefixTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.seek("hello"), None);

        // Test registration
        assert_eq!(trie.register("hello", "world"), None);
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        // Test lookup
        assert_eq!(trie.seek("hello"), Some(&"world"));
        assert_eq!(trie.seek("hello there"), Some(&"world"));
        assert_eq!(trie.seek("hell"), None);
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));

        // Test case sensitivity
        assert_eq!(trie.seek("HELLO"), None);

        // Test update
        assert_eq!(trie.register("hello", "planet"), Some("world"));
        assert_eq!(trie.seek("hello"), Some(&"planet"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_seek_prefers_longest_match() {
        let trie: PrefixTrie<i32> = [("a", 0), ("ab", 0), ("abc", 1), ("abcd", 2), ("abcdefg", -1)]
            .into_iter()
            .collect();

        assert_eq!(trie.seek("abcde"), Some(&2));
        assert_eq!(trie.seek("abcdef"), Some(&2));
        assert_eq!(trie.seek("abcdefg"), Some(&-1));
        assert_eq!(trie.seek("abcdefgh"), Some(&-1));
        assert_eq!(trie.seek("z"), None);
        assert_eq!(trie.seek("0abcde"), None);
    }

    #[test]
    fn test_proper_prefix_of_word_is_not_a_match() {
        let mut trie = PrefixTrie::new();
        trie.register("abc", 1);

        assert_eq!(trie.seek("ab"), None);
        assert_eq!(trie.seek(""), None);
        assert_eq!(trie.get("ab"), None);
    }

    #[test]
    fn test_empty_word_matches_everything() {
        let mut trie = PrefixTrie::new();
        trie.register("", 99);

        assert_eq!(trie.seek("x"), Some(&99));
        assert_eq!(trie.seek(""), Some(&99));
        assert_eq!(trie.get(""), Some(&99));
        assert_eq!(trie.len(), 1);

        trie.register("xy", 7);
        assert_eq!(trie.seek("x"), Some(&99));
        assert_eq!(trie.seek("xyz"), Some(&7));
    }

    #[test]
    fn test_option_values_are_distinct_from_no_match() {
        let mut trie: PrefixTrie<Option<u8>> = PrefixTrie::new();
        trie.register("k", None);

        assert_eq!(trie.seek("k"), Some(&None));
        assert_eq!(trie.seek("j"), None);
    }

    #[test]
    fn test_seek_match_reports_lengths() {
        let mut trie = PrefixTrie::new();
        trie.register("😀😁", 'e');
        trie.register("ab", 'a');

        let found = trie.seek_match("😀😁😂").unwrap();
        assert_eq!(found.value(), &'e');
        assert_eq!(found.chars(), 2);
        assert_eq!(found.bytes(), 8);
        assert_eq!(found.matched("😀😁😂"), Some("😀😁"));

        let found = trie.seek_match("abc").unwrap();
        assert_eq!((found.chars(), found.bytes()), (2, 2));
        assert!(trie.seek_match("b").is_none());
    }

    #[test]
    fn test_seek_chars_matches_seek() {
        let mut trie = PrefixTrie::new();
        trie.register_chars(['の', 'り'], 3);

        assert_eq!(trie.seek_chars("のりまき".chars()), Some(&3));
        assert_eq!(trie.seek("のりまき"), Some(&3));
    }

    #[test]
    fn test_segment_greedy() {
        let trie: PrefixTrie<u32> = [("ka", 1), ("kana", 2), ("na", 3)].into_iter().collect();

        let segments = trie.segment("xkanakax");
        let rendered: Vec<(&str, Option<u32>)> = segments
            .iter()
            .map(|s| (s.text(), s.value().copied()))
            .collect();

        assert_eq!(
            rendered,
            vec![("x", None), ("kana", Some(2)), ("ka", Some(1)), ("x", None)]
        );
    }

    #[test]
    fn test_segment_merges_unmatched_runs() {
        let trie: PrefixTrie<u32> = [("", 0), ("b", 1)].into_iter().collect();

        let segments = trie.segment("aaba");
        assert_eq!(
            segments,
            vec![
                Segment::Unmatched { text: "aa" },
                Segment::Matched { text: "b", value: &1 },
                Segment::Unmatched { text: "a" },
            ]
        );
        assert!(trie.segment("").is_empty());
    }

    /// A word as long as the input allows is a chain of one node per code
    /// point; registering, seeking and dropping it must not exhaust the stack.
    #[test]
    fn test_long_word_register_seek_drop() {
        const LENGTH: usize = 200_000;
        let word = "a".repeat(LENGTH);

        let mut trie = PrefixTrie::new();
        trie.register(&word, 1u8);
        trie.register("😀".repeat(LENGTH), 2u8);

        assert_eq!(trie.seek(&word), Some(&1));
        assert_eq!(trie.seek(format!("{word}b")), Some(&1));
        assert_eq!(trie.seek(&word[..LENGTH - 1]), None);
        assert_eq!(trie.seek_match(&word).map(|m| m.chars()), Some(LENGTH));

        drop(trie);
    }

    #[test]
    fn test_long_word_clone_and_debug() {
        const LENGTH: usize = 200_000;
        let word = "あ".repeat(LENGTH);

        let mut trie = PrefixTrie::new();
        trie.register(&word, 7u32);
        trie.register("あ", 1u32);

        let copy = trie.clone();
        trie.register(&word, 8u32);

        assert_eq!(copy.seek(&word), Some(&7));
        assert_eq!(copy.seek("ああ"), Some(&1));
        assert_eq!(copy.len(), 2);
        assert_eq!(trie.seek(&word), Some(&8));
        assert!(format!("{copy:?}").contains("TrieNode"));

        drop(copy);
        drop(trie);
    }
}
