//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored mapping between a short identifier and a URL
//! - [`NewUrlRecord`] - Input for inserting a record
//!
//! Records are immutable once stored: there is no update or patch type.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
