//! Locator that answers without any network I/O.

use async_trait::async_trait;

use super::service::{AddressKind, IpLocator, LOCAL_LOCATION, UNKNOWN_LOCATION, classify_address};

/// Returns the same location for every routable address.
///
/// Used when geolocation is disabled, and in tests. Missing and loopback
/// addresses follow the same rules as every other locator.
#[derive(Debug, Clone)]
pub struct FixedIpLocator {
    location: String,
}

impl FixedIpLocator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// A locator that reports every routable address as unknown.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LOCATION)
    }
}

impl Default for FixedIpLocator {
    fn default() -> Self {
        Self::unknown()
    }
}

#[async_trait]
impl IpLocator for FixedIpLocator {
    async fn resolve(&self, ip: &str) -> String {
        match classify_address(ip) {
            AddressKind::Missing => UNKNOWN_LOCATION.to_string(),
            AddressKind::Loopback => LOCAL_LOCATION.to_string(),
            AddressKind::Routable(_) => self.location.clone(),
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
