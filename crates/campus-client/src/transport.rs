//! The seam between the resource client and the wire.
//!
//! [`ResourceClient`](crate::ResourceClient) builds [`ApiRequest`]s and hands
//! them to a [`Transport`]. [`HttpTransport`] sends them with `reqwest`; tests
//! substitute a scripted transport.

use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::config::{ClientSettings, USER_AGENT_VALUE};
use crate::error::{ApiError, Result};

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Unencoded path segments (`["students", "search"]`).
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn post<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments).with_body(body)
    }

    pub fn put<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments).with_body(body)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// `/segment/segment`, unencoded. Used for logging and test routing.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Raw reply: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes API requests.
///
/// Implementations report unreachable hosts and timeouts as errors and
/// return every answered request, whatever its status, as an [`ApiResponse`].
pub trait Transport: Clone + Send + Sync + 'static {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// `reqwest`-backed transport with the fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport for the configured base URL.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", settings.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(settings.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL for a request, with segments percent-encoded.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request)?;
        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(&ClientSettings::with_base_url(base)).expect("create transport")
    }

    #[test]
    fn url_joins_segments_under_base_path() {
        let transport = transport("http://localhost:8081/api");
        let url = transport
            .url_for(&ApiRequest::get(["students", "4"]))
            .expect("build url");
        assert_eq!(url.as_str(), "http://localhost:8081/api/students/4");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let transport = transport("http://localhost:8081/api/");
        let url = transport
            .url_for(&ApiRequest::get(["fees"]))
            .expect("build url");
        assert_eq!(url.as_str(), "http://localhost:8081/api/fees");
    }

    #[test]
    fn segments_and_query_are_encoded() {
        let transport = transport("http://localhost:8081/api");
        let url = transport
            .url_for(&ApiRequest::get(["students", "course", "Computer Science"]))
            .expect("build url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/api/students/course/Computer%20Science"
        );

        let url = transport
            .url_for(&ApiRequest::get(["students", "search"]).with_query("q", "ada & co"))
            .expect("build url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/api/students/search?q=ada+%26+co"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(HttpTransport::new(&ClientSettings::with_base_url("not a url")).is_err());
        assert!(HttpTransport::new(&ClientSettings::with_base_url("mailto:x@y.z")).is_err());
    }

    #[test]
    fn request_path_is_unencoded() {
        let request = ApiRequest::put(["fees", "3", "status"], serde_json::json!({"status": "Paid"}));
        assert_eq!(request.path(), "/fees/3/status");
        assert_eq!(request.method, Method::PUT);
    }
}
