//! Visitor geolocation.
//!
//! Provides an [`IpLocator`] trait with two implementations:
//! - [`HttpIpLocator`] - lookup against an ipapi.co-style JSON API
//! - [`FixedIpLocator`] - constant answer for disabled lookups and tests

mod fixed_locator;
mod http_locator;
mod service;

pub use fixed_locator::FixedIpLocator;
pub use http_locator::{DEFAULT_LOOKUP_TIMEOUT, DEFAULT_LOOKUP_URL, HttpIpLocator};
pub use service::{
    AddressKind, IpLocator, LOCAL_LOCATION, UNKNOWN_LOCATION, classify_address,
};
