//! HTTP plumbing shared by every entity screen.
//!
//! Screens never talk to `gloo_net` directly: they go through
//! [`client::EntityClient`], which sends [`ApiRequest`]s over a [`Transport`].
//! The browser implementation lives in [`gloo`]; tests plug in a recording fake.

pub mod client;
pub mod gloo;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, only for POST/PUT
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_json(method: HttpMethod, url: impl Into<String>, body: String) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header lookup, case-insensitive on the name
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("image upload failed: {0}")]
    Upload(String),
}

impl ApiError {
    /// The message a screen shows. Every variant collapses into the same
    /// generic text; the detail only goes to the console log.
    pub fn user_message(&self, action: ApiAction, noun: &str) -> String {
        log::warn!("{} {}: {}", action.as_str(), noun, self);
        failure_message(action, noun)
    }
}

/// What the user was trying to do when a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    Fetch,
    Load,
    Create,
    Update,
    Delete,
}

impl ApiAction {
    fn as_str(self) -> &'static str {
        match self {
            ApiAction::Fetch => "fetch",
            ApiAction::Load => "load",
            ApiAction::Create => "add",
            ApiAction::Update => "update",
            ApiAction::Delete => "delete",
        }
    }
}

/// Banner text for a failed request, e.g. "Failed to fetch assets."
pub fn failure_message(action: ApiAction, noun: &str) -> String {
    format!("Failed to {} {}.", action.as_str(), noun)
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let response = ApiResponse {
            status: 200,
            headers: vec![("x-total-count".to_string(), "13".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("X-Total-Count"), Some("13".to_string()));
        assert_eq!(response.header("X-Page-Size"), None);
    }

    #[test]
    fn test_success_range() {
        let mut response = ApiResponse {
            status: 204,
            ..Default::default()
        };
        assert!(response.is_success());
        response.status = 404;
        assert!(!response.is_success());
        response.status = 302;
        assert!(!response.is_success());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(failure_message(ApiAction::Fetch, "assets"), "Failed to fetch assets.");
        assert_eq!(failure_message(ApiAction::Create, "category"), "Failed to add category.");
        assert_eq!(failure_message(ApiAction::Delete, "user"), "Failed to delete user.");
        assert_eq!(
            ApiError::Http { status: 500 }.user_message(ApiAction::Update, "asset"),
            ApiError::Network("offline".to_string()).user_message(ApiAction::Update, "asset"),
        );
    }
}
