//! Request handler module
//!
//! Method gating, path decoding and resolution, and static file serving.

pub mod listing;
pub mod path;
pub mod router;
pub mod static_files;

pub use router::handle_request;
