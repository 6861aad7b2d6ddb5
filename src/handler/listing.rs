//! Directory listing generation.

use std::io;
use std::path::Path;

use tokio::fs;

/// One entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read directory entries, sorted case-insensitively by name.
///
/// Entries with non-UTF-8 names are skipped.
pub async fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        entries.push(ListingEntry { name, is_dir });
    }
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(entries)
}

/// Render the listing page for a request path.
///
/// Directory entries are suffixed with `/` and link relative to the
/// (trailing-slash) request path, so plain anchors resolve correctly.
pub fn render(url_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {url_path}");
    let escaped_title = escape_html(&title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{escaped_title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{escaped_title}</h1>\n<hr>\n<ul>\n"));
    for entry in entries {
        let display = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            encode_href(&display),
            escape_html(&display)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Percent-encode a listing href so names with spaces or reserved
/// characters remain valid link targets.
fn encode_href(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn renders_files_and_directories() {
        let html = render("/docs/", &[entry("a.txt", false), entry("sub", true)]);
        assert!(html.contains("Directory listing for /docs/"));
        assert!(html.contains("<a href=\"a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"sub/\">sub/</a>"));
    }

    #[test]
    fn escapes_html_in_names() {
        let html = render("/", &[entry("<script>.txt", false)]);
        assert!(!html.contains("<script>.txt"));
        assert!(html.contains("&lt;script&gt;.txt"));
    }

    #[test]
    fn encodes_hrefs_with_spaces() {
        let html = render("/", &[entry("my file.txt", false)]);
        assert!(html.contains("href=\"my%20file.txt\""));
        assert!(html.contains(">my file.txt</a>"));
    }

    #[tokio::test]
    async fn read_entries_sorts_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Zebra.txt"), b"z").unwrap();
        std::fs::write(dir.path().join("apple.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("mid")).unwrap();

        let entries = read_entries(dir.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["apple.txt", "mid", "Zebra.txt"]);
        assert!(entries[1].is_dir);
    }
}
