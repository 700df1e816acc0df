//! Visitor address extraction for click analytics.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Returns the address a click should be attributed to.
///
/// Without a proxy the peer socket address is the only trustworthy source.
/// When `behind_proxy` is set, the first parseable entry of
/// `X-Forwarded-For` wins, then `X-Real-IP`, then the peer address.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.2".parse().unwrap());
/// let peer: SocketAddr = "10.0.0.2:4000".parse().unwrap();
///
/// assert_eq!(extract_client_ip(&headers, peer, true), "203.0.113.7");
/// assert_eq!(extract_client_ip(&headers, peer, false), "10.0.0.2");
/// ```
pub fn extract_client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(ip) = forwarded_for(headers).or_else(|| real_ip(headers))
    {
        return ip.to_string();
    }

    peer.ip().to_string()
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .find_map(|part| part.trim().parse::<IpAddr>().ok())
}

fn real_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-real-ip")?
        .to_str()
        .ok()?
        .trim()
        .parse::<IpAddr>()
        .ok()
}
