//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortcode mapped to its original URL
//! - [`ClickEvent`] - One recorded redirect against a shortcode
//! - [`UrlStats`] - A record with its click history
//!
//! Creation inputs are separate structs (`NewUrlRecord`, `NewClick`), so
//! fields the store assigns (timestamps, derived expiry) never come from
//! callers.

pub mod click;
pub mod stats;
pub mod url_record;

pub use click::{ClickEvent, DEFAULT_REFERRER, DEFAULT_USER_AGENT, NewClick};
pub use stats::UrlStats;
pub use url_record::{NewUrlRecord, UrlRecord};
