//! Turning raw user input into directory and package names

use regex::Regex;
use std::sync::LazyLock;

/// Characters rejected in file names on at least one supported platform
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '\\', '|', '?', '*'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("static regex"));

/// Clean a project name into a relative directory path.
///
/// Drops forbidden characters, leading whitespace, and any trailing mix of
/// whitespace and `/`. Case and inner spaces are left alone. Idempotent.
/// An empty result means the input is unusable.
pub fn sanitize_directory_name(input: &str) -> String {
    let kept: String = input.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    kept.trim_start()
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

/// Suggest an npm-style package name for arbitrary input.
///
/// The result only contains `[a-z0-9-~]` and never ends with `-`,
/// so any non-empty suggestion passes [`super::is_valid_package_name`].
pub fn suggest_package_name(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(hyphenated.as_ref());
    INVALID_RUN
        .replace_all(stripped, "-")
        .trim_end_matches('-')
        .to_string()
}
