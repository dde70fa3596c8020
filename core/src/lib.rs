//! API client core for the task service.
//!
//! # Overview
//! `TaskClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TaskApi` pairs it with a `Transport` to
//! run the five task operations (list, get, create, update, delete) as
//! single request/response round trips.
//!
//! # Design
//! - `TaskClient` is stateless; it holds only the collection endpoint.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   FFI crate can expose the same split to a mobile host.
//! - Every failure surfaces as one error shape (`ApiError`, wrapped with the
//!   operation name in `TaskError`). The variant only records the stage
//!   that failed.
//! - No retries, no timeouts, no caching: one attempt per call.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod transport;
pub mod types;

pub use api::{Operation, TaskApi};
pub use client::TaskClient;
pub use error::{ApiError, TaskError};
pub use filter::{filter_tasks, StatusFilter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Envelope, Page, PageLinks, PageMeta, Task, TaskId, TaskInput, TaskStatus};
