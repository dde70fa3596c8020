//! C-ABI wrapper around `task-core`.
//!
//! # Overview
//! Exposes the task CRUD API through `extern "C"` functions so a mobile host
//! (Swift, Kotlin via JNI, or anything with a C FFI) can build requests and
//! parse responses while doing the HTTP exchange with its own networking
//! stack.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiTaskResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - Optional string arguments are null when absent; optional status
//!   arguments are negative when absent.
//! - The C caller owns all returned pointers and must call the matching
//!   `task_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use task_core::{ApiError, HttpRequest, HttpResponse, TaskClient, TaskId, TaskInput};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `TaskClient` bound to the collection `endpoint`
/// (e.g. `https://host/api/todos`).
///
/// Returns null if `endpoint` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `task_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn task_client_new(endpoint: *const c_char) -> *mut FfiTaskClient {
    catch_unwind(|| match opt_string(endpoint) {
        Some(url) => Box::into_raw(Box::new(FfiTaskClient {
            inner: TaskClient::new(&url),
        })),
        None => std::ptr::null_mut(),
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `TaskClient` created by `task_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn task_client_free(client: *mut FfiTaskClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Copy a nullable C string into an owned `String`.
fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Run `build` against the client, returning null on a null client, a
/// rejected input, or a panic.
fn build_with<F>(client: *const FfiTaskClient, build: F) -> *mut FfiHttpRequest
where
    F: FnOnce(&TaskClient) -> Result<HttpRequest, ApiError>,
{
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match build(&client.inner) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    }))
    .unwrap_or(std::ptr::null_mut())
}

fn task_input(
    title: *const c_char,
    details: *const c_char,
    status: i32,
) -> Result<TaskInput, ApiError> {
    Ok(TaskInput {
        title: opt_string(title),
        details: opt_string(details),
        status: status_arg(status)?,
    })
}

/// Build an HTTP request for listing tasks (first page).
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `task_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_list_tasks(client: *const FfiTaskClient) -> *mut FfiHttpRequest {
    build_with(client, |c| Ok(c.build_list_tasks()))
}

/// Build an HTTP request for one page (1-based) of the task list. The
/// response parses with `task_parse_list_page`.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_list_tasks_page(client: *const FfiTaskClient, page: u32) -> *mut FfiHttpRequest {
    build_with(client, |c| Ok(c.build_list_tasks_page(page)))
}

/// Build an HTTP request for fetching a single task by id.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_get_task(client: *const FfiTaskClient, id: TaskId) -> *mut FfiHttpRequest {
    build_with(client, |c| Ok(c.build_get_task(id)))
}

/// Build an HTTP request for creating a task. A negative `status` sends
/// `not_started`.
///
/// Returns null if `client` is null or `status` is out of range.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_create_task(
    client: *const FfiTaskClient,
    title: *const c_char,
    details: *const c_char,
    status: i32,
) -> *mut FfiHttpRequest {
    build_with(client, |c| c.build_create_task(&task_input(title, details, status)?))
}

/// Build an HTTP request for updating a task. Null strings and a negative
/// `status` are left out of the body.
///
/// Returns null if `client` is null or `status` is out of range.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_update_task(
    client: *const FfiTaskClient,
    id: TaskId,
    title: *const c_char,
    details: *const c_char,
    status: i32,
) -> *mut FfiHttpRequest {
    build_with(client, |c| c.build_update_task(id, &task_input(title, details, status)?))
}

/// Build an HTTP request for deleting a task by id.
#[unsafe(no_mangle)]
pub extern "C" fn task_build_delete_task(client: *const FfiTaskClient, id: TaskId) -> *mut FfiHttpRequest {
    build_with(client, |c| Ok(c.build_delete_task(id)))
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// read as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse::new(resp.status, opt_string(resp.body).unwrap_or_default())
}

fn parse_with<F>(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
    name: &str,
    parse: F,
) -> *mut FfiTaskResult
where
    F: FnOnce(&TaskClient, HttpResponse) -> *mut FfiTaskResult,
{
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiTaskResult::null_arg("client");
        }
        if response.is_null() {
            return FfiTaskResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = ffi_response_to_core(unsafe { &*response });
        parse(&client.inner, resp)
    }))
    .unwrap_or_else(|_| FfiTaskResult::panic(&format!("panic in {name}")))
}

/// Parse a list response. `data_tag = TaskList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_list_tasks(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_list_tasks", |c, r| {
        c.parse_list_tasks(r)
            .map_or_else(FfiTaskResult::from_error, FfiTaskResult::ok_task_list)
    })
}

/// Parse one page of the task list. `data_tag = TaskPage` on success;
/// `has_next` tells the host whether to request the following page.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_list_page(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_list_page", |c, r| {
        c.parse_list_page(r)
            .map_or_else(FfiTaskResult::from_error, FfiTaskResult::ok_task_page)
    })
}

/// Parse a get response. `data_tag = Task` on success.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_get_task(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_get_task", |c, r| {
        c.parse_get_task(r)
            .map_or_else(FfiTaskResult::from_error, FfiTaskResult::ok_task)
    })
}

/// Parse a create response. `data_tag = Task` on success.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_create_task(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_create_task", |c, r| {
        c.parse_create_task(r)
            .map_or_else(FfiTaskResult::from_error, FfiTaskResult::ok_task)
    })
}

/// Parse an update response. `data_tag = Task` on success.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_update_task(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_update_task", |c, r| {
        c.parse_update_task(r)
            .map_or_else(FfiTaskResult::from_error, FfiTaskResult::ok_task)
    })
}

/// Parse a delete response. `data_tag = None` on success.
#[unsafe(no_mangle)]
pub extern "C" fn task_parse_delete_task(
    client: *const FfiTaskClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTaskResult {
    parse_with(client, response, "task_parse_delete_task", |c, r| {
        c.parse_delete_task(r)
            .map_or_else(FfiTaskResult::from_error, |()| FfiTaskResult::ok_empty())
    })
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `task_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn task_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        drop_c_string(req.path);
        drop_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                drop_c_string(h.key);
                drop_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiTaskResult` returned by any `task_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn task_free_result(result: *mut FfiTaskResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        drop_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Task => {
                let task = unsafe { Box::from_raw(result.data as *mut FfiTask) };
                task.free_fields();
            }
            FfiDataTag::TaskList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiTaskList) };
                list.free_items();
            }
            FfiDataTag::TaskPage => {
                let page = unsafe { Box::from_raw(result.data as *mut FfiTaskPage) };
                page.list.free_items();
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn task_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| drop_c_string(s));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    const TASK_JSON: &str = r#"{"id":1,"title":"First","details":"d1","status":"in_progress","created_at":"2024-05-01T10:00:00.000000Z","updated_at":"2024-05-01T11:00:00.000000Z"}"#;

    fn new_client() -> *mut FfiTaskClient {
        let url = CString::new("http://localhost:3000/api/todos").unwrap();
        task_client_new(url.as_ptr())
    }

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn request_body(req: *mut FfiHttpRequest) -> serde_json::Value {
        let req_ref = unsafe { &*req };
        serde_json::from_str(c_str(req_ref.body)).unwrap()
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        assert!(!client.is_null());
        task_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(task_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        task_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_list_tasks_returns_correct_request() {
        let client = new_client();
        let req = task_build_list_tasks(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Get);
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/api/todos");
        assert!(req_ref.body.is_null());
        assert_eq!(req_ref.headers_len, 0);

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_list_tasks_null_client_returns_null() {
        assert!(task_build_list_tasks(std::ptr::null()).is_null());
    }

    #[test]
    fn build_list_tasks_page_adds_query() {
        let client = new_client();
        let req = task_build_list_tasks_page(client, 2);
        let req_ref = unsafe { &*req };
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/api/todos?page=2");

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_get_task_uses_id_in_path() {
        let client = new_client();
        let req = task_build_get_task(client, 42);
        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Get);
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/api/todos/42");

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_create_task_defaults_status() {
        let client = new_client();
        let title = CString::new("Buy milk").unwrap();
        let req = task_build_create_task(client, title.as_ptr(), std::ptr::null(), -1);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Post);
        assert_eq!(req_ref.headers_len, 1);
        let header = unsafe { &*req_ref.headers };
        assert_eq!(c_str(header.key), "content-type");
        assert_eq!(c_str(header.value), "application/json");
        assert_eq!(
            request_body(req),
            serde_json::json!({"title":"Buy milk","status":"not_started"})
        );

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_create_task_rejects_unknown_status() {
        let client = new_client();
        let title = CString::new("x").unwrap();
        let req = task_build_create_task(client, title.as_ptr(), std::ptr::null(), 7);
        assert!(req.is_null());
        task_client_free(client);
    }

    #[test]
    fn build_update_task_status_only() {
        let client = new_client();
        let req = task_build_update_task(client, 5, std::ptr::null(), std::ptr::null(), 2);
        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Put);
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/api/todos/5");
        assert_eq!(request_body(req), serde_json::json!({"status":"completed"}));

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_update_task_title_and_details() {
        let client = new_client();
        let title = CString::new("Renamed").unwrap();
        let details = CString::new("").unwrap();
        let req = task_build_update_task(client, 5, title.as_ptr(), details.as_ptr(), -1);
        assert_eq!(
            request_body(req),
            serde_json::json!({"title":"Renamed","details":""})
        );

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn build_delete_task_has_no_body() {
        let client = new_client();
        let req = task_build_delete_task(client, 9);
        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Delete);
        assert!(req_ref.body.is_null());

        task_free_request(req);
        task_client_free(client);
    }

    #[test]
    fn parse_list_tasks_empty() {
        let client = new_client();
        let body = CString::new(r#"{"data":[],"meta":{"total":0}}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_list_tasks(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.data_tag, FfiDataTag::TaskList);

        let list = unsafe { &*(r.data as *const FfiTaskList) };
        assert_eq!(list.len, 0);
        assert!(list.items.is_null());

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_list_tasks_two_items() {
        let client = new_client();
        let second = TASK_JSON
            .replace(r#""id":1"#, r#""id":2"#)
            .replace("First", "Second")
            .replace("in_progress", "completed");
        let body = CString::new(format!(r#"{{"data":[{TASK_JSON},{second}]}}"#)).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_list_tasks(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);

        let list = unsafe { &*(r.data as *const FfiTaskList) };
        assert_eq!(list.len, 2);
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };
        assert_eq!(items[0].id, 1);
        assert_eq!(c_str(items[0].title), "First");
        assert_eq!(items[0].status, FfiTaskStatus::InProgress);
        assert_eq!(items[1].id, 2);
        assert_eq!(c_str(items[1].title), "Second");
        assert_eq!(items[1].status, FfiTaskStatus::Completed);

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_list_page_reports_position() {
        let client = new_client();
        let body = CString::new(format!(
            r#"{{"data":[{TASK_JSON}],"links":{{"next":"http://localhost:3000/api/todos?page=2"}},"meta":{{"current_page":1,"last_page":2}}}}"#
        ))
        .unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_list_page(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.data_tag, FfiDataTag::TaskPage);

        let page = unsafe { &*(r.data as *const FfiTaskPage) };
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 2);
        assert!(page.has_next);
        assert_eq!(page.list.len, 1);
        let items = unsafe { std::slice::from_raw_parts(page.list.items, page.list.len as usize) };
        assert_eq!(c_str(items[0].title), "First");

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_list_page_last_page_has_no_next() {
        let client = new_client();
        let body =
            CString::new(r#"{"data":[],"links":{"next":null},"meta":{"current_page":2,"last_page":2}}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_list_page(client, &resp);
        let r = unsafe { &*result };
        let page = unsafe { &*(r.data as *const FfiTaskPage) };
        assert_eq!(page.current_page, 2);
        assert!(!page.has_next);
        assert!(page.list.items.is_null());

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn error_body_with_nul_byte_keeps_text() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 500,
            body: std::ptr::null(),
        };
        let result = task_parse_list_page(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Http);
        assert_eq!(r.http_status, 500);
        task_free_result(result);

        let err = FfiTaskResult::from_error(ApiError::Status {
            status: 500,
            body: "boom\0tail".to_string(),
        });
        assert_eq!(c_str(unsafe { &*err }.error_message), "API returned 500: boomtail");
        task_free_result(err);
        task_client_free(client);
    }

    #[test]
    fn parse_get_task_success() {
        let client = new_client();
        let body = CString::new(format!(r#"{{"data":{TASK_JSON}}}"#)).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_get_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.data_tag, FfiDataTag::Task);

        let task = unsafe { &*(r.data as *const FfiTask) };
        assert_eq!(task.id, 1);
        assert_eq!(c_str(task.details), "d1");
        assert_eq!(c_str(task.created_at), "2024-05-01T10:00:00.000000Z");
        assert_eq!(c_str(task.updated_at), "2024-05-01T11:00:00.000000Z");

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_get_task_not_found_is_http_error() {
        let client = new_client();
        let body = CString::new(r#"{"message":"Task not found"}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 404,
            body: body.as_ptr(),
        };
        let result = task_parse_get_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Http);
        assert_eq!(r.http_status, 404);
        assert!(r.data.is_null());
        let msg = c_str(r.error_message);
        assert!(msg.contains("404"));
        assert!(msg.contains("Task not found"));

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_create_task_success() {
        let client = new_client();
        let body = CString::new(TASK_JSON).unwrap();
        let resp = FfiHttpResponse {
            status: 201,
            body: body.as_ptr(),
        };
        let result = task_parse_create_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        let task = unsafe { &*(r.data as *const FfiTask) };
        assert_eq!(c_str(task.title), "First");

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_create_task_unprocessable() {
        let client = new_client();
        let body = CString::new(r#"{"error":"title too short"}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 422,
            body: body.as_ptr(),
        };
        let result = task_parse_create_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Http);
        assert_eq!(r.http_status, 422);
        assert!(c_str(r.error_message).contains("title too short"));

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_update_task_bad_json() {
        let client = new_client();
        let body = CString::new("<html>").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = task_parse_update_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Deserialization);

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_delete_task_success_with_null_body() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 204,
            body: std::ptr::null(),
        };
        let result = task_parse_delete_task(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.data_tag, FfiDataTag::None);
        assert!(r.data.is_null());

        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let resp = FfiHttpResponse {
            status: 200,
            body: std::ptr::null(),
        };
        let result = task_parse_list_tasks(std::ptr::null(), &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        assert_eq!(c_str(r.error_message), "null argument: client");
        task_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = new_client();
        let result = task_parse_get_task(client, std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        task_free_result(result);
        task_client_free(client);
    }

    #[test]
    fn free_functions_accept_null() {
        task_free_request(std::ptr::null_mut());
        task_free_result(std::ptr::null_mut());
        task_free_string(std::ptr::null_mut());
    }
}
