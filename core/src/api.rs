//! The five task operations as single round trips.
//!
//! `TaskApi` runs build, execute and parse in sequence and attaches the
//! operation to any failure. Calls share no state, so a failed call leaves
//! the next one unaffected, and callers may run several at once with no
//! ordering guarantees between them.

use std::fmt;

use tracing::{debug, error, warn};

use crate::client::TaskClient;
use crate::config;
use crate::error::{ApiError, TaskError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Task, TaskId, TaskInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListTasks,
    GetTask,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::ListTasks => "fetch tasks",
            Operation::GetTask => "fetch task",
            Operation::CreateTask => "create task",
            Operation::UpdateTask => "update task",
            Operation::DeleteTask => "delete task",
        })
    }
}

#[derive(Debug, Clone)]
pub struct TaskApi<T = UreqTransport> {
    client: TaskClient,
    transport: T,
}

impl TaskApi<UreqTransport> {
    pub fn new(endpoint: &str) -> Self {
        Self::with_transport(endpoint, UreqTransport::new())
    }

    /// Client for the process-wide endpoint (see [`config::api_url`]).
    pub fn from_config() -> Self {
        Self::new(config::api_url())
    }
}

impl<T: Transport> TaskApi<T> {
    pub fn with_transport(endpoint: &str, transport: T) -> Self {
        Self {
            client: TaskClient::new(endpoint),
            transport,
        }
    }

    pub fn client(&self) -> &TaskClient {
        &self.client
    }

    /// First page of tasks as served by the endpoint.
    pub fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.round_trip(
            Operation::ListTasks,
            Ok(self.client.build_list_tasks()),
            TaskClient::parse_list_tasks,
        )
    }

    /// Every page, walked in order from page 1.
    ///
    /// Stops at the last page, at an empty page, or as soon as the server
    /// answers with a page other than the one requested (an endpoint that
    /// ignores `?page`), in which case that page's data is not repeated.
    pub fn list_all_tasks(&self) -> Result<Vec<Task>, TaskError> {
        let mut tasks = Vec::new();
        let mut page_number = 1;
        let mut previous_next: Option<String> = None;
        loop {
            let page = self.round_trip(
                Operation::ListTasks,
                Ok(self.client.build_list_tasks_page(page_number)),
                TaskClient::parse_list_page,
            )?;
            let served = page.meta.current_page;
            let repeated_next = page.links.next.is_some() && page.links.next == previous_next;
            if page_number > 1 && ((served != 0 && served != page_number) || repeated_next) {
                warn!(requested = page_number, served, "server ignored page parameter");
                break;
            }
            let empty = page.data.is_empty();
            let last = page.is_last();
            tasks.extend(page.data);
            if last || empty {
                break;
            }
            previous_next = page.links.next;
            page_number += 1;
        }
        debug!(pages = page_number, count = tasks.len(), "fetched all task pages");
        Ok(tasks)
    }

    pub fn get_task(&self, id: TaskId) -> Result<Task, TaskError> {
        self.round_trip(
            Operation::GetTask,
            Ok(self.client.build_get_task(id)),
            TaskClient::parse_get_task,
        )
    }

    pub fn create_task(&self, input: &TaskInput) -> Result<Task, TaskError> {
        self.round_trip(
            Operation::CreateTask,
            self.client.build_create_task(input),
            TaskClient::parse_create_task,
        )
    }

    pub fn update_task(&self, id: TaskId, input: &TaskInput) -> Result<Task, TaskError> {
        self.round_trip(
            Operation::UpdateTask,
            self.client.build_update_task(id, input),
            TaskClient::parse_update_task,
        )
    }

    pub fn delete_task(&self, id: TaskId) -> Result<(), TaskError> {
        self.round_trip(
            Operation::DeleteTask,
            Ok(self.client.build_delete_task(id)),
            TaskClient::parse_delete_task,
        )
    }

    fn round_trip<R>(
        &self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&TaskClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, TaskError> {
        let result = request.and_then(|request| {
            debug!(method = %request.method, path = %request.path, "sending request");
            let response = self.transport.execute(&request)?;
            debug!(status = response.status, "response received");
            parse(&self.client, response)
        });
        result.map_err(|kind| {
            let err = TaskError::new(operation, kind);
            error!(%operation, error = %err.kind, "task api call failed");
            err
        })
    }
}
