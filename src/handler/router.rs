//! Request entry point: method gating, path decoding, dispatch, access log.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};

use crate::config::AppState;
use crate::handler::{path, static_files};
use crate::http::response;
use crate::logger::{self, AccessLogEntry};

/// Per-request data shared by the serving functions.
pub struct RequestContext<'a> {
    /// Path exactly as it appeared on the request line (still encoded).
    pub raw_path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

/// Handle one HTTP request.
///
/// Always returns a response; per-request failures surface as HTTP error
/// statuses and never terminate the connection task.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().to_string();
    let raw_path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let version = req.version();
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    let response = dispatch(&req, &state).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(remote_addr.ip().to_string(), method, raw_path);
        entry.query = query;
        entry.http_version = version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn dispatch(
    req: &Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let method = req.method();
    match *method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => return response::options_ok(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return response::method_not_allowed();
        }
    }

    let raw_path = req.uri().path();
    let Some(decoded) = path::percent_decode(raw_path) else {
        logger::log_warning(&format!("Malformed request path: {raw_path}"));
        return response::bad_request();
    };

    let ctx = RequestContext {
        raw_path,
        is_head: *method == Method::HEAD,
        if_none_match: header_string(req, "if-none-match"),
        range: header_string(req, "range"),
    };

    static_files::serve(&ctx, &decoded, state).await
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body as _;
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
