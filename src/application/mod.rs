//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations the HTTP
//! handlers call.
//!
//! # Available Services
//!
//! - [`services::shortcode_registry::ShortcodeRegistry`] - Shortcode creation, resolution and statistics
//! - [`services::click_ledger::ClickLedger`] - Click recording and retrieval

pub mod services;
