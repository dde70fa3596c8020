//! Error types for the task API client.
//!
//! # Design
//! Callers see a single error shape. `ApiError` records which stage failed
//! (server rejection, transport, decode, encode, local input check) so
//! tests and callers can inspect it, but "not found", "validation failed"
//! and "server error" are all the same `Status` variant, told apart only by
//! the embedded status code and body.
//!
//! `TaskError` is what `TaskApi` returns: the `ApiError` plus the operation
//! that produced it.

use thiserror::Error;

use crate::api::Operation;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received (connect, send or read failed).
    #[error("{0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Caller-supplied input was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// HTTP status carried by a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response text carried by a server rejection.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Failure of one `TaskApi` operation.
///
/// The cause is already part of the message, so it is not exposed again as
/// `source()`; error reporters that walk the chain print it once.
#[derive(Debug, Error)]
#[error("failed to {operation}: {kind}")]
pub struct TaskError {
    pub operation: Operation,
    pub kind: ApiError,
}

impl TaskError {
    pub fn new(operation: Operation, kind: ApiError) -> Self {
        Self { operation, kind }
    }

    pub fn status(&self) -> Option<u16> {
        self.kind.status()
    }

    pub fn body(&self) -> Option<&str> {
        self.kind.body()
    }
}
