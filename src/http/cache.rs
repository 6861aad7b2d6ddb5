//! `ETag` generation and conditional request checks.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a strong `ETag` for a body: length plus content hash, quoted.
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Whether a client `If-None-Match` header matches the computed `ETag`.
///
/// Handles comma-separated lists and the `*` wildcard. A match means the
/// client's cached copy is current and the response should be 304.
pub fn none_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == "*" || candidate == etag)
    })
}
