//! Executing `HttpRequest` values over the network.
//!
//! # Design
//! A `Transport` only moves bytes. Any response that arrives, whatever its
//! status, comes back as an `HttpResponse` so that `TaskClient` alone decides
//! what counts as a failure. `ApiError::Transport` is reserved for exchanges
//! that never produced a response.
//!
//! One attempt per request; there is no retry and no timeout.

use ureq::{Agent, RequestBuilder};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Disables ureq's status-code-as-error behavior so 4xx/5xx responses
    /// are returned as data.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = request.path.as_str();
        let headers = &request.headers;
        let body = request.body.as_deref().map(str::as_bytes);

        let sent = match (request.method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(path), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(path), headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(path), headers).send(body),
            (HttpMethod::Post, None) => with_headers(self.agent.post(path), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(path), headers).send(body),
            (HttpMethod::Put, None) => with_headers(self.agent.put(path), headers).send_empty(),
        };
        let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
