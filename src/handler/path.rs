//! Request path decoding and filesystem resolution.

use std::path::{Path, PathBuf};

use crate::logger;

/// Result of resolving a request path against the serving root.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file to serve.
    File(PathBuf),
    /// A directory, requested with a trailing slash.
    Directory(PathBuf),
    /// A directory requested without a trailing slash; redirect to add it.
    RedirectToSlash,
    /// Nothing servable at this path (missing, traversal, special file).
    NotFound,
}

/// Percent-decode a request path.
///
/// Returns `None` for truncated or non-hex escapes, non-UTF-8 results,
/// and embedded NUL bytes.
pub fn percent_decode(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_value(*bytes.get(i + 1)?)?;
            let lo = hex_value(*bytes.get(i + 2)?)?;
            out.push(hi << 4 | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    if out.contains(&0) {
        return None;
    }
    String::from_utf8(out).ok()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Resolve a decoded request path under `root`.
///
/// `root` must already be canonical. Any `..` segment is rejected before
/// touching the filesystem, and the canonicalized candidate must still
/// live under `root`, which also stops symlinks from escaping the tree.
/// All rejections collapse to `NotFound` so nothing outside the root is
/// ever revealed.
pub fn resolve(root: &Path, decoded_path: &str) -> Resolved {
    let relative = decoded_path.trim_start_matches('/');

    let mut candidate = root.to_path_buf();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Resolved::NotFound,
            segment => candidate.push(segment),
        }
    }

    let Ok(canonical) = candidate.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {decoded_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        if relative.is_empty() || decoded_path.ends_with('/') {
            Resolved::Directory(canonical)
        } else {
            Resolved::RedirectToSlash
        }
    } else if canonical.is_file() {
        Resolved::File(canonical)
    } else {
        Resolved::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn root_with_content() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"<h1>hi</h1>").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("guide.txt"), b"guide").unwrap();
        dir
    }

    fn canonical_root(dir: &TempDir) -> PathBuf {
        dir.path().canonicalize().unwrap()
    }

    #[test]
    fn decodes_plain_and_escaped_paths() {
        assert_eq!(percent_decode("/a/b.txt").as_deref(), Some("/a/b.txt"));
        assert_eq!(percent_decode("/with%20space").as_deref(), Some("/with space"));
        assert_eq!(percent_decode("/%2e%2e/x").as_deref(), Some("/../x"));
    }

    #[test]
    fn rejects_malformed_escapes() {
        assert!(percent_decode("/bad%2").is_none());
        assert!(percent_decode("/bad%zz").is_none());
        assert!(percent_decode("/nul%00byte").is_none());
    }

    #[test]
    fn resolves_file() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        match resolve(&root, "/index.html") {
            Resolved::File(p) => assert!(p.ends_with("index.html")),
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[test]
    fn resolves_root_as_directory() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        assert!(matches!(resolve(&root, "/"), Resolved::Directory(_)));
    }

    #[test]
    fn directory_without_slash_redirects() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        assert_eq!(resolve(&root, "/docs"), Resolved::RedirectToSlash);
        assert!(matches!(resolve(&root, "/docs/"), Resolved::Directory(_)));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        assert_eq!(resolve(&root, "/missing.txt"), Resolved::NotFound);
    }

    #[test]
    fn dot_dot_segments_are_rejected() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        assert_eq!(resolve(&root, "/../../etc/passwd"), Resolved::NotFound);
        assert_eq!(resolve(&root, "/docs/../../etc/passwd"), Resolved::NotFound);
    }

    #[test]
    fn single_dot_and_empty_segments_are_skipped() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        match resolve(&root, "/./docs//guide.txt") {
            Resolved::File(p) => assert!(p.ends_with("guide.txt")),
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlink_escaping_root_is_blocked() {
        let dir = root_with_content();
        let root = canonical_root(&dir);
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), b"secret").unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            dir.path().join("link.txt"),
        )
        .unwrap();
        assert_eq!(resolve(&root, "/link.txt"), Resolved::NotFound);
    }
}
