//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the state behind the registry and the ledger so the
//! services in [`crate::application::services`] never touch a concrete map.
//!
//! # Available Repositories
//!
//! - [`UrlRecordRepository`] - Shortcode registration and lookup
//! - [`ClickRepository`] - Append-only click logs
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod click_repository;
pub mod url_record_repository;

pub use click_repository::ClickRepository;
pub use url_record_repository::UrlRecordRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use url_record_repository::MockUrlRecordRepository;
