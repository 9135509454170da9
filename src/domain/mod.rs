//! Domain layer containing business entities and storage contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - Hostname existence check used before allocation
//!
//! # Allocation Flow
//!
//! 1. HTTP handler validates the submitted URL
//! 2. [`host_resolver::HostResolver`] confirms the hostname resolves
//! 3. [`repositories::UrlRepository::upsert`] creates the record or returns the existing one

pub mod entities;
pub mod host_resolver;
pub mod repositories;
