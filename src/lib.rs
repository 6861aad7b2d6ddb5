//! staticd - a static file HTTP server.
//!
//! Binds a TCP port and serves files from a configured root directory over
//! HTTP/1.1 GET and HEAD, with directory listings, index files, ETag
//! validation, and single-range requests.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
