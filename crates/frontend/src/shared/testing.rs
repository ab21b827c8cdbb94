//! Recording transport for native tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::shared::api::{ApiError, ApiRequest, ApiResponse, Transport};

#[derive(Default)]
struct FakeState {
    requests: Vec<ApiRequest>,
    responses: VecDeque<Result<ApiResponse, ApiError>>,
}

/// Replays queued responses in order and records every request.
/// With nothing queued it answers `200` with an empty JSON array.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    pub fn push_json(&self, status: u16, body: &str, headers: &[(&str, &str)]) {
        self.state.borrow_mut().responses.push_back(Ok(ApiResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: ApiError) {
        self.state.borrow_mut().responses.push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        state.responses.pop_front().unwrap_or_else(|| {
            Ok(ApiResponse {
                status: 200,
                headers: Vec::new(),
                body: "[]".to_string(),
            })
        })
    }
}
