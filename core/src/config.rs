//! Process-wide API endpoint.
//!
//! The endpoint is resolved once and never changes afterwards. Resolution
//! order: an explicit `init_api_url` call at startup, then the
//! `TASKS_API_URL` environment variable, then `DEFAULT_API_URL`.

use std::sync::OnceLock;

pub const DEFAULT_API_URL: &str = "https://oversight.pokkada.com/api/todos";

pub const API_URL_ENV: &str = "TASKS_API_URL";

static API_URL: OnceLock<String> = OnceLock::new();

/// Pin the endpoint. Returns `false` if it was already resolved, in which
/// case the earlier value stays.
pub fn init_api_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    let pinned = API_URL.set(url.to_string()).is_ok();
    if !pinned {
        tracing::warn!(requested = url, active = api_url(), "api url already initialized");
    }
    pinned
}

pub fn api_url() -> &'static str {
    API_URL.get_or_init(|| resolve(std::env::var(API_URL_ENV).ok()))
}

fn resolve(from_env: Option<String>) -> String {
    match from_env {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
