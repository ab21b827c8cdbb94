//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the asset API listens on when no override is compiled in
pub const DEFAULT_API_PORT: u16 = 5119;

/// Get the base URL for API requests
///
/// `ASSET_API_BASE` set at build time wins (e.g. `https://assets.example.com`).
/// Otherwise the URL is built from the current window location, using port
/// 5119 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:5119"
/// - Empty string if window is not available
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/assets/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("ASSET_API_BASE") {
        return normalize_base(base);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://assets.example.com/"), "https://assets.example.com");
        assert_eq!(normalize_base(" http://10.0.0.5:8080 "), "http://10.0.0.5:8080");
    }
}
