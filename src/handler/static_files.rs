//! Static file serving
//!
//! Turns a resolved filesystem path into an HTTP response: file bytes with
//! inferred content type, index files or generated listings for
//! directories, 404 for everything else.

use std::path::Path;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::path::{self, Resolved};
use crate::handler::router::RequestContext;
use crate::http::{cache, mime, parse_range, response, RangeOutcome};
use crate::logger;

/// Serve a decoded request path from the configured root.
pub async fn serve(
    ctx: &RequestContext<'_>,
    decoded_path: &str,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match path::resolve(&state.root, decoded_path) {
        Resolved::File(file) => serve_file(ctx, &file).await,
        Resolved::Directory(dir) => serve_directory(ctx, &dir, state).await,
        // Redirect with the still-encoded request path so the Location
        // header stays a valid URI.
        Resolved::RedirectToSlash => response::moved_permanently(&format!("{}/", ctx.raw_path)),
        Resolved::NotFound => response::not_found(),
    }
}

/// Serve a directory: first matching index file, else a generated listing.
async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &Path,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    for index in &state.config.static_files.index_files {
        let candidate = dir.join(index);
        if candidate.is_file() {
            return serve_file(ctx, &candidate).await;
        }
    }

    if !state.config.static_files.directory_listing {
        return response::not_found();
    }

    match listing::read_entries(dir).await {
        Ok(entries) => {
            let html = listing::render(ctx.raw_path, &entries);
            response::html_page(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read directory '{}': {e}", dir.display()));
            response::not_found()
        }
    }
}

/// Read a file and build the response, honoring conditional and range
/// requests.
async fn serve_file(ctx: &RequestContext<'_>, file: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(file).await {
        Ok(content) => content,
        Err(e) => {
            // Unreadable files (permissions, races with deletion) surface
            // as 404 without affecting the server.
            logger::log_error(&format!("Failed to read file '{}': {e}", file.display()));
            return response::not_found();
        }
    };

    let content_type = mime::content_type_for(file);
    build_file_response(&content, content_type, ctx)
}

fn build_file_response(
    data: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::etag_for(data);
    if cache::none_match(ctx.if_none_match.as_deref(), &etag) {
        return response::not_modified(&etag);
    }

    match parse_range(ctx.range.as_deref(), data.len()) {
        RangeOutcome::Partial { start, end } => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::copy_from_slice(&data[start..=end])
            };
            response::partial(body, content_type, &etag, start, end, data.len())
        }
        RangeOutcome::Unsatisfiable => response::range_not_satisfiable(data.len()),
        RangeOutcome::Full => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::copy_from_slice(data)
            };
            response::ok_file(body, content_type, &etag, data.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(is_head: bool, if_none_match: Option<&str>, range: Option<&str>) -> RequestContext<'static> {
        RequestContext {
            raw_path: "/file.txt",
            is_head,
            if_none_match: if_none_match.map(ToString::to_string),
            range: range.map(ToString::to_string),
        }
    }

    #[test]
    fn full_response_carries_etag_and_length() {
        let resp = build_file_response(b"0123456789", "text/plain; charset=utf-8", &ctx(false, None, None));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "10");
        assert!(resp.headers().contains_key("ETag"));
    }

    #[test]
    fn matching_etag_returns_not_modified() {
        let etag = cache::etag_for(b"0123456789");
        let resp = build_file_response(b"0123456789", "text/plain", &ctx(false, Some(&etag), None));
        assert_eq!(resp.status(), 304);
    }

    #[test]
    fn range_request_returns_partial() {
        let resp = build_file_response(b"0123456789", "text/plain", &ctx(false, None, Some("bytes=2-5")));
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 2-5/10");
    }

    #[test]
    fn out_of_range_returns_416() {
        let resp = build_file_response(b"0123", "text/plain", &ctx(false, None, Some("bytes=10-")));
        assert_eq!(resp.status(), 416);
        assert_eq!(resp.headers()["Content-Range"], "bytes */4");
    }

    #[test]
    fn head_keeps_headers_but_drops_body() {
        use hyper::body::Body as _;
        let resp = build_file_response(b"0123456789", "text/plain", &ctx(true, None, None));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "10");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }
}
