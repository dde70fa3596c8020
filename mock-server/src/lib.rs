//! In-memory reference implementation of the task API.
//!
//! Serves the same contract as the production backend: list and get wrap
//! their payload in `{data, ...}`, create and update answer with the bare
//! task, delete answers 204. Used by the client's integration tests.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub const COLLECTION_PATH: &str = "/api/todos";

pub const DEFAULT_PER_PAGE: usize = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub details: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub details: Option<String>,
    pub status: Option<TaskStatus>,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub details: Option<String>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Single<T> {
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub from: Option<usize>,
    pub last_page: usize,
    pub path: String,
    pub per_page: usize,
    pub to: Option<usize>,
    pub total: usize,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Task not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": self.to_string() }),
            ),
            Self::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "error": msg }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Default)]
struct Store {
    next_id: u64,
    tasks: BTreeMap<u64, Task>,
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    per_page: usize,
}

pub fn app() -> Router {
    app_with_page_size(DEFAULT_PER_PAGE)
}

pub fn app_with_page_size(per_page: usize) -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(Store::default())),
        per_page: per_page.max(1),
    };
    Router::new()
        .route(COLLECTION_PATH, get(list_tasks).post(create_task))
        .route("/api/todos/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve_app(listener, app()).await
}

pub async fn serve_app(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn page_link(page: usize) -> String {
    format!("{COLLECTION_PATH}?page={page}")
}

fn required_title(title: Option<String>) -> Result<String, ServerError> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(ServerError::Validation("title is required".to_string())),
    }
}

/// Slice `tasks` (ordered by id) into page `page`, 1-based.
fn paginate(tasks: Vec<Task>, page: usize, per_page: usize) -> Page<Task> {
    let total = tasks.len();
    let last_page = total.div_ceil(per_page).max(1);
    let offset = (page - 1).saturating_mul(per_page);
    let data: Vec<Task> = tasks.into_iter().skip(offset).take(per_page).collect();
    let (from, to) = if data.is_empty() {
        (None, None)
    } else {
        (Some(offset + 1), Some(offset + data.len()))
    };
    Page {
        links: PageLinks {
            first: page_link(1),
            last: page_link(last_page),
            prev: (page > 1).then(|| page_link(page - 1)),
            next: (page < last_page).then(|| page_link(page + 1)),
        },
        meta: PageMeta {
            current_page: page,
            from,
            last_page,
            path: COLLECTION_PATH.to_string(),
            per_page,
            to,
            total,
        },
        data,
    }
}

async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Page<Task>> {
    let page = params.page.unwrap_or(1).max(1);
    let tasks: Vec<Task> = state.store.read().await.tasks.values().cloned().collect();
    Json(paginate(tasks, page, state.per_page))
}

async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let title = required_title(input.title)?;
    let mut store = state.store.write().await;
    store.next_id += 1;
    let timestamp = now();
    let task = Task {
        id: store.next_id,
        title,
        details: input.details.unwrap_or_default(),
        status: input.status.unwrap_or_default(),
        created_at: timestamp.clone(),
        updated_at: timestamp,
    };
    store.tasks.insert(task.id, task.clone());
    debug!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Single<Task>>, ServerError> {
    let store = state.store.read().await;
    let task = store.tasks.get(&id).cloned().ok_or(ServerError::NotFound)?;
    Ok(Json(Single { data: task }))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, ServerError> {
    let title = input.title.map(|t| required_title(Some(t))).transpose()?;
    let mut store = state.store.write().await;
    let task = store.tasks.get_mut(&id).ok_or(ServerError::NotFound)?;
    if let Some(title) = title {
        task.title = title;
    }
    if let Some(details) = input.details {
        task.details = details;
    }
    if let Some(status) = input.status {
        task.status = status;
    }
    task.updated_at = now();
    debug!(id, "task updated");
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    let mut store = state.store.write().await;
    store.tasks.remove(&id).ok_or(ServerError::NotFound)?;
    debug!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            details: String::new(),
            status: TaskStatus::NotStarted,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn task_serializes_to_json() {
        let json = serde_json::to_value(task(1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Task 1");
        assert_eq!(json["status"], "not_started");
    }

    #[test]
    fn create_task_fields_are_optional() {
        let input: CreateTask = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn create_task_rejects_unknown_status() {
        let result: Result<CreateTask, _> =
            serde_json::from_str(r#"{"title":"x","status":"archived"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn required_title_rejects_blank() {
        assert!(required_title(None).is_err());
        assert!(required_title(Some("  ".to_string())).is_err());
        assert_eq!(required_title(Some("ok".to_string())).unwrap(), "ok");
    }

    #[test]
    fn paginate_first_of_several_pages() {
        let page = paginate((1..=5).map(task).collect(), 1, 2);
        let ids: Vec<u64> = page.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.meta.from, Some(1));
        assert_eq!(page.meta.to, Some(2));
        assert_eq!(page.links.prev, None);
        assert_eq!(page.links.next.as_deref(), Some("/api/todos?page=2"));
    }

    #[test]
    fn paginate_last_page_is_partial() {
        let page = paginate((1..=5).map(task).collect(), 3, 2);
        let ids: Vec<u64> = page.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5]);
        assert_eq!(page.links.next, None);
        assert_eq!(page.links.prev.as_deref(), Some("/api/todos?page=2"));
    }

    #[test]
    fn paginate_empty_store() {
        let page = paginate(Vec::new(), 1, 15);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.last_page, 1);
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.from, None);
    }

    #[test]
    fn paginate_past_the_end() {
        let page = paginate((1..=2).map(task).collect(), 9, 15);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.current_page, 9);
        assert_eq!(page.links.next, None);
    }
}
