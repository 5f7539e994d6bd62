//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from `EVENTX_API_URL`
//! because the bundle is served as static files with no runtime config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Base URL of the EventX API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("EVENTX_API_URL"))
}

/// Absolute URL for an API `path`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn normalize_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim).map(|s| s.trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}
