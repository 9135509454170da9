//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers and
//! the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - URL acceptance, allocation and resolution

pub mod services;
