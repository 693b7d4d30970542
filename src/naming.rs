//! Method-name grammar and namespace joining.
//!
//! Names are dot-separated identifier segments (`service.method`). Each
//! segment starts with a letter or underscore and continues with letters,
//! digits, or underscores. The `rpc` namespace is reserved for protocol
//! extensions and is rejected on every registration path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between a namespace prefix and a method name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Namespace reserved for protocol extensions.
pub const RESERVED_NAMESPACE: &str = "rpc";

static METHOD_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("method name regex should be valid")
});

/// Whether `name` matches the accepted method-name grammar.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    METHOD_NAME_REGEX.is_match(name)
}

/// Whether `name` is, or lives under, the reserved namespace.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    match name.strip_prefix(RESERVED_NAMESPACE) {
        Some("") => true,
        Some(rest) => rest.starts_with(NAMESPACE_SEPARATOR),
        None => false,
    }
}

/// Join an optional namespace prefix to a method name.
///
/// A non-empty prefix gains a trailing separator unless it already ends
/// with one; an empty prefix leaves the name untouched.
#[must_use]
pub fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    if prefix.ends_with(NAMESPACE_SEPARATOR) {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}{NAMESPACE_SEPARATOR}{name}")
    }
}
