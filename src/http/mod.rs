//! HTTP protocol layer module
//!
//! Protocol-level building blocks (content types, conditional requests,
//! range parsing, response builders), decoupled from request routing.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

pub use range::{parse_range, RangeOutcome};
