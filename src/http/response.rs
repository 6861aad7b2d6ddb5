//! HTTP response builders.
//!
//! Builders never panic: header assembly failures are logged and degrade
//! to an empty response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// 200 response for a file body, with `ETag` and range-acceptance headers.
///
/// `content_length` is the full body size; `body` may be empty for HEAD.
pub fn ok_file(
    body: Bytes,
    content_type: &str,
    etag: &str,
    content_length: usize,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("200", &e))
}

/// 206 Partial Content for bytes `start..=end` of a `total`-byte body.
pub fn partial(
    body: Bytes,
    content_type: &str,
    etag: &str,
    start: usize,
    end: usize,
    total: usize,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", end - start + 1)
        .header("Content-Range", format!("bytes {start}-{end}/{total}"))
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("206", &e))
}

/// 304 Not Modified for a matching conditional request.
pub fn not_modified(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback("304", &e))
}

/// 200 HTML page (used for directory listings).
pub fn html_page(html: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = html.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(html) };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("HTML", &e))
}

/// 301 redirect, used to append the trailing slash on directory requests.
pub fn moved_permanently(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Length", 0usize)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback("301", &e))
}

/// 400 Bad Request (malformed request path).
pub fn bad_request() -> Response<Full<Bytes>> {
    plain_text(400, "400 Bad Request")
}

/// 404 Not Found.
pub fn not_found() -> Response<Full<Bytes>> {
    plain_text(404, "404 Not Found")
}

/// 405 Method Not Allowed, with the supported method set.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| fallback("405", &e))
}

/// 204 response to OPTIONS.
pub fn options_ok() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback("OPTIONS", &e))
}

/// 416 Range Not Satisfiable, reporting the actual body size.
pub fn range_not_satisfiable(total: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Range", format!("bytes */{total}"))
        .body(Full::new(Bytes::from("Range Not Satisfiable")))
        .unwrap_or_else(|e| fallback("416", &e))
}

fn plain_text(status: u16, message: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message)))
        .unwrap_or_else(|e| fallback(message, &e))
}

fn fallback(label: &str, error: &hyper::http::Error) -> Response<Full<Bytes>> {
    crate::logger::log_error(&format!("Failed to build {label} response: {error}"));
    Response::new(Full::new(Bytes::new()))
}
