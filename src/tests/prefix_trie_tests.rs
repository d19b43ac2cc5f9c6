// Copyright (c) 2026 Prefix Matcher Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Property-based tests for the prefix trie.
//!
//! Every property is checked against the brute-force model in `test_utils`.

use proptest::prelude::*;

use super::test_utils::{brute_force_seek, is_char_prefix, registrations_strategy, word_strategy};
use crate::data_structures::{PrefixTrie, SharedPrefixTrie};

fn build(registrations: &[(String, i64)]) -> PrefixTrie<i64> {
    registrations.iter().cloned().collect()
}

proptest! {
    // Property: seek agrees with a linear scan over all registrations
    #[test]
    fn prop_seek_matches_reference(
        registrations in registrations_strategy(20),
        input in word_strategy(10)
    ) {
        let trie = build(&registrations);
        prop_assert_eq!(trie.seek(&input), brute_force_seek(&registrations, &input));
    }

    // Property: every registered word finds its latest value exactly
    #[test]
    fn prop_registered_word_is_found(registrations in registrations_strategy(20)) {
        let trie = build(&registrations);
        for (word, _) in &registrations {
            let latest = registrations.iter().rev().find(|(w, _)| w == word).map(|(_, v)| v);
            prop_assert_eq!(trie.seek(word), latest);
            prop_assert_eq!(trie.get(word), latest);
        }
    }

    // Property: appending a suffix never loses the match, it can only get longer
    #[test]
    fn prop_suffix_keeps_a_match(
        registrations in registrations_strategy(20),
        input in word_strategy(6),
        suffix in word_strategy(6)
    ) {
        let trie = build(&registrations);
        let extended = format!("{input}{suffix}");

        if let Some(short) = trie.seek_match(&input) {
            let long = trie.seek_match(&extended);
            prop_assert!(long.is_some());
            prop_assert!(long.map_or(0, |m| m.chars()) >= short.chars());
        }
    }

    // Property: the reported match length names a registered word
    #[test]
    fn prop_match_length_is_a_registered_prefix(
        registrations in registrations_strategy(20),
        input in word_strategy(10)
    ) {
        let trie = build(&registrations);
        if let Some(found) = trie.seek_match(&input) {
            let matched = found.matched(&input).unwrap();
            prop_assert_eq!(matched.chars().count(), found.chars());
            prop_assert!(is_char_prefix(matched, &input));
            prop_assert_eq!(trie.get(matched), Some(found.value()));
        }
    }

    // Property: len counts distinct words
    #[test]
    fn prop_len_counts_distinct_words(registrations in registrations_strategy(20)) {
        let trie = build(&registrations);
        let distinct: std::collections::HashSet<&String> =
            registrations.iter().map(|(w, _)| w).collect();
        prop_assert_eq!(trie.len(), distinct.len());
    }

    // Property: segments concatenate back to the input and matched ones are registered
    #[test]
    fn prop_segments_cover_input(
        registrations in registrations_strategy(20),
        input in word_strategy(16)
    ) {
        let trie = build(&registrations);
        let segments = trie.segment(&input);

        let joined: String = segments.iter().map(|s| s.text()).collect();
        prop_assert_eq!(&joined, &input);

        for segment in &segments {
            prop_assert!(!segment.text().is_empty());
            if let Some(value) = segment.value() {
                prop_assert_eq!(trie.get(segment.text()), Some(value));
            }
        }
    }

    // Property: the shared wrapper answers like the plain trie
    #[test]
    fn prop_shared_trie_agrees(
        registrations in registrations_strategy(20),
        input in word_strategy(10)
    ) {
        let shared = SharedPrefixTrie::new();
        for (word, value) in &registrations {
            shared.register(word, *value);
        }
        prop_assert_eq!(shared.seek(&input), brute_force_seek(&registrations, &input).copied());
    }
}
