//! Locator backed by an external JSON geolocation API.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::service::{AddressKind, IpLocator, LOCAL_LOCATION, UNKNOWN_LOCATION, classify_address};

/// Default lookup endpoint; `{ip}` is replaced with the visitor address.
pub const DEFAULT_LOOKUP_URL: &str = "https://ipapi.co/{ip}/json/";

/// Default upper bound for a single lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider rejected lookup: {0}")]
    Provider(String),

    #[error("response carried no location")]
    Empty,
}

/// Subset of the ipapi.co response body.
#[derive(Debug, Default, Deserialize)]
struct LookupResponse {
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl LookupResponse {
    /// `"City, Region, Country"` when all three are known, the country alone
    /// when only it is known.
    fn location(&self) -> Option<String> {
        let city = present(&self.city);
        let region = present(&self.region);
        let country = present(&self.country_name);

        match (city, region, country) {
            (Some(city), Some(region), Some(country)) => {
                Some(format!("{city}, {region}, {country}"))
            }
            (_, _, Some(country)) => Some(country.to_string()),
            _ => None,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Resolves visitor addresses through an HTTP API such as ipapi.co.
///
/// Each lookup is bounded by `timeout`; a slow or failing provider yields
/// [`UNKNOWN_LOCATION`] and is never retried. Loopback and missing addresses
/// never reach the network.
#[derive(Debug, Clone)]
pub struct HttpIpLocator {
    client: reqwest::Client,
    url_template: String,
    timeout: Duration,
}

impl HttpIpLocator {
    /// Creates a locator for `url_template`, which must contain `{ip}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
            timeout,
        })
    }

    fn lookup_url(&self, ip: IpAddr) -> String {
        self.url_template.replace("{ip}", &ip.to_string())
    }

    async fn fetch(&self, ip: IpAddr) -> Result<String, LookupError> {
        let body: LookupResponse = self
            .client
            .get(self.lookup_url(ip))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.error {
            return Err(LookupError::Provider(
                body.reason.unwrap_or_else(|| "unspecified".to_string()),
            ));
        }

        body.location().ok_or(LookupError::Empty)
    }
}

#[async_trait]
impl IpLocator for HttpIpLocator {
    async fn resolve(&self, ip: &str) -> String {
        let addr = match classify_address(ip) {
            AddressKind::Missing => return UNKNOWN_LOCATION.to_string(),
            AddressKind::Loopback => return LOCAL_LOCATION.to_string(),
            AddressKind::Routable(addr) => addr,
        };

        match tokio::time::timeout(self.timeout, self.fetch(addr)).await {
            Ok(Ok(location)) => {
                debug!(%addr, %location, "Location resolved");
                location
            }
            Ok(Err(e)) => {
                warn!(%addr, "Location lookup failed: {}", e);
                UNKNOWN_LOCATION.to_string()
            }
            Err(_) => {
                warn!(%addr, timeout_ms = self.timeout.as_millis() as u64, "Location lookup timed out");
                UNKNOWN_LOCATION.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
