use async_trait::async_trait;
use contracts::shared::pagination::PAGINATION_HEADERS;
use gloo_net::http::Request;

use super::client::parse_upload_response;
use super::{ApiError, ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::shared::api_utils::api_url;

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        }
        .header("Accept", "application/json");

        let response = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let headers = PAGINATION_HEADERS
            .iter()
            .filter_map(|name| {
                response
                    .headers()
                    .get(name)
                    .map(|value| (name.to_string(), value))
            })
            .collect();

        // Bodies of failed requests are never inspected
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| ApiError::Decode(format!("Failed to read response: {}", e)))?
        } else {
            String::new()
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

/// Upload an image as multipart field `file` to `/api/image`; returns the
/// stored file's URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;

    let response = Request::post(&api_url("/api/image"))
        .body(form)
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Upload(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;
    parse_upload_response(&body)
}
