//! API base URL resolution.

use crate::shared::config::AppConfig;

/// localStorage key that overrides the configured API base at runtime
const API_BASE_OVERRIDE_KEY: &str = "pkwt_api_base";

/// Resolve the base URL for API requests
///
/// Order: `pkwt_api_base` in localStorage, `api.base_url` from config, then
/// the current window location on port 3000.
pub fn api_base(config: &AppConfig) -> String {
    if let Some(base) = storage_override() {
        return normalize_base(&base);
    }
    if !config.api.base_url.trim().is_empty() {
        return normalize_base(&config.api.base_url);
    }
    location_base()
}

/// Build a full API URL from a base and a path starting with "/api/"
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn storage_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_OVERRIDE_KEY).ok()??;
    (!value.trim().is_empty()).then_some(value)
}

fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
