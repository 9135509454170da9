//! Utility functions for identifier generation and URL processing.
//!
//! - [`short_id`] - Short identifier generation
//! - [`url_normalizer`] - URL parsing and normalization

pub mod short_id;
pub mod url_normalizer;
