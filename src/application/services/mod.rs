//! Business logic services for the application layer.

pub mod click_ledger;
pub mod shortcode_registry;

pub use click_ledger::ClickLedger;
pub use shortcode_registry::{DEFAULT_VALIDITY_MINUTES, MAX_VALIDITY_MINUTES, ShortcodeRegistry};
