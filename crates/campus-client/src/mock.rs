//! Scripted transport for tests.
//!
//! Responses are queued per `(method, path)`. The last queued response for a
//! route keeps answering once the queue is down to one entry, so a single
//! `respond_json` call covers repeated requests. Unscripted routes answer 404.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::Method;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};

type Route = (Method, String);

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<Route, VecDeque<Result<ApiResponse>>>,
    requests: Vec<ApiRequest>,
}

/// In-memory [`Transport`] that records every request it receives.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, method: Method, path: &str, outcome: Result<ApiResponse>) -> &Self {
        self.lock()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(outcome);
        self
    }

    /// Queue a raw response body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body)))
    }

    /// Queue a JSON response.
    pub fn respond_json(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Queue a `{success: true, data}` envelope with status 200.
    pub fn respond_wrapped(&self, method: Method, path: &str, data: Value) -> &Self {
        let body = serde_json::json!({ "success": true, "data": data, "message": "ok" });
        self.respond_json(method, path, 200, body)
    }

    /// Queue a transport failure.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.push(method, path, Err(error))
    }

    /// Every request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Requests matching a method and path.
    #[must_use]
    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<ApiRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| &r.method == method && r.path() == path)
            .cloned()
            .collect()
    }

    fn answer(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut state = self.lock();
        let route = (request.method.clone(), request.path());
        state.requests.push(request);
        match state.routes.get_mut(&route) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("empty mock queue".to_string()))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Network("empty mock queue".to_string()))),
            None => Ok(ApiResponse::new(
                404,
                serde_json::json!({
                    "success": false,
                    "message": format!("no route for {} {}", route.0, route.1)
                })
                .to_string(),
            )),
        }
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.answer(request)
    }
}
