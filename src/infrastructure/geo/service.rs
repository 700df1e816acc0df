//! Location resolver trait and the address rules every resolver shares.

use async_trait::async_trait;
use std::net::IpAddr;

/// Location reported when an address cannot be resolved.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Location reported for loopback visitors.
pub const LOCAL_LOCATION: &str = "Local Development";

/// How an address should be handled before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// Empty or unparseable.
    Missing,
    /// Loopback, including IPv4-mapped loopback.
    Loopback,
    /// Anything worth looking up.
    Routable(IpAddr),
}

/// Classifies a raw address string.
///
/// ```ignore
/// assert_eq!(classify_address(""), AddressKind::Missing);
/// assert_eq!(classify_address("::ffff:127.0.0.1"), AddressKind::Loopback);
/// ```
pub fn classify_address(ip: &str) -> AddressKind {
    match ip.trim().parse::<IpAddr>() {
        Ok(addr) if addr.to_canonical().is_loopback() => AddressKind::Loopback,
        Ok(addr) => AddressKind::Routable(addr),
        Err(_) => AddressKind::Missing,
    }
}

/// Turns a visitor address into a human-readable location.
///
/// Implementations must never fail and must return within a bounded time:
/// on any error, timeout or missing address they return
/// [`UNKNOWN_LOCATION`]. Loopback addresses resolve to [`LOCAL_LOCATION`]
/// without any network call.
///
/// # Implementations
///
/// - [`crate::infrastructure::geo::HttpIpLocator`] - JSON lookup over HTTP
/// - [`crate::infrastructure::geo::FixedIpLocator`] - constant answer, no I/O
#[async_trait]
pub trait IpLocator: Send + Sync {
    /// Resolves `ip` to a location string.
    async fn resolve(&self, ip: &str) -> String;

    /// Short name used in health output and logs.
    fn name(&self) -> &'static str;
}
