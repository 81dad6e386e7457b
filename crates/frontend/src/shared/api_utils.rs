//! API utilities for talking to the Saleema Tour API
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set, otherwise the
/// origin of the current page.
///
/// # Returns
/// - API base URL like "https://api.saleematour.com" or "http://localhost:8080"
/// - Empty string if neither is available (relative requests)
pub fn api_base() -> String {
    let configured = config().api.base_url.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/packages");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
