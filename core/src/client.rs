//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskClient` holds only the collection endpoint (e.g.
//! `https://host/api/todos`) and carries no mutable state between calls.
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//!
//! Response shapes differ by endpoint: list and get answer with a `{data}`
//! envelope, create and update answer with the bare task. The parsers keep
//! that asymmetry rather than guessing.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, Page, Task, TaskId, TaskInput, TaskStatus};

/// Wire body for create and update: exactly `{title, details, status}`.
#[derive(Serialize)]
struct TaskBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
}

impl<'a> From<&'a TaskInput> for TaskBody<'a> {
    fn from(input: &'a TaskInput) -> Self {
        Self {
            title: input.title.as_deref(),
            details: input.details.as_deref(),
            status: input.status,
        }
    }
}

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskClient {
    endpoint: String,
}

impl TaskClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        bodyless(HttpMethod::Get, self.endpoint.clone())
    }

    pub fn build_list_tasks_page(&self, page: u32) -> HttpRequest {
        bodyless(HttpMethod::Get, format!("{}?page={page}", self.endpoint))
    }

    pub fn build_get_task(&self, id: TaskId) -> HttpRequest {
        bodyless(HttpMethod::Get, self.task_url(id))
    }

    /// A missing status is sent as `not_started`.
    pub fn build_create_task(&self, input: &TaskInput) -> Result<HttpRequest, ApiError> {
        let mut body = TaskBody::from(input);
        body.status = Some(input.status.unwrap_or_default());
        with_json(HttpMethod::Post, self.endpoint.clone(), &body)
    }

    /// Fields absent from `input` are left out of the body, status included.
    pub fn build_update_task(&self, id: TaskId, input: &TaskInput) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, self.task_url(id), &TaskBody::from(input))
    }

    pub fn build_delete_task(&self, id: TaskId) -> HttpRequest {
        bodyless(HttpMethod::Delete, self.task_url(id))
    }

    /// Returns the envelope's `data` only; `links` and `meta` are dropped.
    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        let envelope: Envelope<Vec<Task>> = decode(response)?;
        Ok(envelope.data)
    }

    pub fn parse_list_page(&self, response: HttpResponse) -> Result<Page<Task>, ApiError> {
        decode(response)
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        let envelope: Envelope<Task> = decode(response)?;
        Ok(envelope.data)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{id}", self.endpoint)
    }
}

fn bodyless(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, path: String, body: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Any status outside 2xx is a failure, whatever the body says.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
