//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating rendered prompts.

#![allow(dead_code)]

use predicates::prelude::*;

/// Exact prompt text, with no trailing newline
pub fn renders(expected: &str) -> impl Predicate<str> {
    predicates::str::diff(expected.to_string())
}

/// Nothing printed at all
pub fn is_empty_prompt() -> impl Predicate<str> {
    predicates::str::is_empty()
}

/// An abbreviated commit hash and nothing else
pub fn is_short_sha() -> impl Predicate<str> {
    predicates::str::is_match("^[0-9a-f]{7}$").expect("valid regex")
}

/// Styled output that leaves the terminal in its default style
pub fn is_styled_and_reset() -> impl Predicate<str> {
    predicates::str::contains("\x1b[").and(predicates::str::ends_with("\x1b[0m"))
}
