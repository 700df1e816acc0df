//! Helpers shared by the services and the HTTP layer.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`url_validator`] - Absolute URL checks for submitted links
//! - [`client_ip`] - Visitor address extraction from a request

pub mod client_ip;
pub mod code_generator;
pub mod url_validator;
