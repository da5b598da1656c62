//! Functional core of the trailhead API.
//!
//! Key encoding, request validation, sanitization, paginated reads over a
//! single shared table and response formatting. Nothing here performs network
//! I/O; stores are reached through [`storage::TableStore`].

pub mod catalog;
pub mod error;
pub mod response;
pub mod sanitize;
pub mod serde;
pub mod storage;
pub mod validation;
