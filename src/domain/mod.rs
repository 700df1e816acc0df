//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`]; the
//! in-memory implementation of the repository traits lives in
//! [`crate::infrastructure::persistence`].
//!
//! # Redirect Flow
//!
//! 1. HTTP handler resolves the shortcode via the registry
//! 2. The visitor's address is turned into a location (no store lock held)
//! 3. A [`entities::NewClick`] is appended through the click ledger
//! 4. The store stamps it and returns the stored [`entities::ClickEvent`]

pub mod entities;
pub mod repositories;
