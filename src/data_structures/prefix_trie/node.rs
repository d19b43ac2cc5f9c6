// Copyright (c) 2026 Prefix Matcher Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node implementation for the prefix trie.
//!
//! Each node owns its children outright; the trie is a strict tree with no
//! shared or back references. A single long word is a chain as deep as the
//! word, so dropping and cloning walk the tree with an explicit stack instead
//! of recursing.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the prefix trie.
///
/// Each node represents one code point along a word path. A node is terminal
/// exactly when it carries a value.
pub(crate) struct TrieNode<T> {
    /// Map of code points to owned child nodes
    pub(crate) children: FnvHashMap<char, TrieNode<T>>,

    /// Value of the word ending at this node, if any
    pub(crate) value: Option<T>,
}

impl<T> TrieNode<T> {
    /// Creates a new non-terminal node with no children.
    pub(crate) fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            value: None,
        }
    }

    /// Returns the child for `c`, creating an empty one if it is missing.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode<T> {
        self.children.entry(c).or_insert_with(TrieNode::new)
    }

    /// Returns the child for `c` if the edge exists.
    #[inline]
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode<T>> {
        self.children.get(&c)
    }
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TrieNode<T> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped, so each node is
        // freed with an empty child map.
        let mut stack: Vec<TrieNode<T>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<T: Clone> Clone for TrieNode<T> {
    fn clone(&self) -> Self {
        // Breadth-first listing of (source node, parent index, edge); every
        // parent precedes its children.
        let mut order: Vec<(&TrieNode<T>, usize, char)> = vec![(self, 0, '\0')];
        let mut next = 0;
        while next < order.len() {
            let node = order[next].0;
            order.extend(node.children.iter().map(|(&c, child)| (child, next, c)));
            next += 1;
        }

        let mut copies: Vec<TrieNode<T>> = order
            .iter()
            .map(|(node, _, _)| TrieNode {
                children: FnvHashMap::default(),
                value: node.value.clone(),
            })
            .collect();

        // Children sit after their parent, so walking backwards attaches each
        // copy only once its own subtree is complete.
        for index in (1..order.len()).rev() {
            let (_, parent, c) = order[index];
            let copy = std::mem::take(&mut copies[index]);
            copies[parent].children.insert(c, copy);
        }

        std::mem::take(&mut copies[0])
    }
}

impl<T: fmt::Debug> fmt::Debug for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the immediate level; descending would recurse per code point.
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
