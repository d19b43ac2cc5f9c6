//! Test modules for the prefix matcher.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Property-based tests for the prefix trie using proptest
//! - Shared strategies and fixtures

pub mod prefix_trie_tests;
