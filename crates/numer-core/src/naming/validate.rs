//! Package name grammar

use regex::Regex;
use std::sync::LazyLock;

// Optional `@scope/` then the base segment; ASCII only, no uppercase.
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("static regex")
});

/// Check whether `name` is usable as the manifest `name` field
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}
