//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use task_core::{ApiError, HttpMethod, Page, Task, TaskClient, TaskStatus};

/// Opaque handle to a `TaskClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiTaskClient {
    pub(crate) inner: TaskClient,
}

/// Copy `s` into a heap C string owned by the caller. Interior NUL bytes
/// cannot be represented and are dropped; the rest of the text is kept.
pub(crate) fn c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    let mut bytes = s.into();
    bytes.retain(|&b| b != 0);
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Release a string produced by `c_string`. Null is ignored.
pub(crate) fn drop_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `task_build_*` functions. The host executes the request and
/// passes the response back through `task_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: task_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: c_string(req.path),
            headers,
            headers_len,
            body: req.body.map_or(std::ptr::null_mut(), |b| c_string(b)),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The host builds this after executing a request and passes a pointer to a
/// `task_parse_*` function. The FFI layer reads but does not free it.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Task types
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiTaskStatus {
    NotStarted = 0,
    InProgress = 1,
    Completed = 2,
}

impl From<TaskStatus> for FfiTaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::NotStarted => FfiTaskStatus::NotStarted,
            TaskStatus::InProgress => FfiTaskStatus::InProgress,
            TaskStatus::Completed => FfiTaskStatus::Completed,
        }
    }
}

/// Decode a status argument: negative means "not given".
pub(crate) fn status_arg(code: i32) -> Result<Option<TaskStatus>, ApiError> {
    match code {
        c if c < 0 => Ok(None),
        0 => Ok(Some(TaskStatus::NotStarted)),
        1 => Ok(Some(TaskStatus::InProgress)),
        2 => Ok(Some(TaskStatus::Completed)),
        other => Err(ApiError::InvalidInput(format!("unknown status code: {other}"))),
    }
}

/// A single task exposed to C.
#[repr(C)]
pub struct FfiTask {
    pub id: u64,
    pub title: *mut c_char,
    pub details: *mut c_char,
    pub status: FfiTaskStatus,
    pub created_at: *mut c_char,
    pub updated_at: *mut c_char,
}

impl FfiTask {
    fn from_core(task: Task) -> Self {
        FfiTask {
            id: task.id,
            title: c_string(task.title),
            details: c_string(task.details),
            status: task.status.into(),
            created_at: c_string(task.created_at),
            updated_at: c_string(task.updated_at),
        }
    }

    /// Free the C-string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        drop_c_string(self.title);
        drop_c_string(self.details);
        drop_c_string(self.created_at);
        drop_c_string(self.updated_at);
    }
}

/// A list of tasks exposed to C.
#[repr(C)]
pub struct FfiTaskList {
    pub items: *mut FfiTask,
    pub len: u32,
}

/// One page of the task list with the position the server reported.
/// `has_next` is false on the last page.
#[repr(C)]
pub struct FfiTaskPage {
    pub list: FfiTaskList,
    pub current_page: u32,
    pub last_page: u32,
    pub has_next: bool,
}

fn ffi_task_list(tasks: Vec<Task>) -> FfiTaskList {
    let len = tasks.len() as u32;
    let items = if tasks.is_empty() {
        std::ptr::null_mut()
    } else {
        let ffi_tasks: Box<[FfiTask]> = tasks.into_iter().map(FfiTask::from_core).collect();
        Box::into_raw(ffi_tasks) as *mut FfiTask
    };
    FfiTaskList { items, len }
}

impl FfiTaskList {
    /// Free the items (but not the struct itself).
    pub(crate) fn free_items(&self) {
        if self.items.is_null() || self.len == 0 {
            return;
        }
        let items = unsafe {
            Box::from_raw(std::ptr::slice_from_raw_parts_mut(self.items, self.len as usize))
        };
        for item in items.iter() {
            item.free_fields();
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiTaskResult`.
///
/// A missing task is `Http` with `http_status` 404, like any other
/// rejected request.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Http = 1,
    Transport = 2,
    Deserialization = 3,
    Serialization = 4,
    InvalidInput = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `task_free_result` what `FfiTaskResult::data` points to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    Task = 1,
    TaskList = 2,
    TaskPage = 3,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiTaskResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiTaskResult {
    fn ok(data_tag: FfiDataTag, data: *mut c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiTaskResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiTaskResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying a single `FfiTask`.
    pub(crate) fn ok_task(task: Task) -> *mut Self {
        let ffi_task = Box::new(FfiTask::from_core(task));
        Self::ok(FfiDataTag::Task, Box::into_raw(ffi_task) as *mut c_void)
    }

    /// Build a success result carrying a `FfiTaskList`.
    pub(crate) fn ok_task_list(tasks: Vec<Task>) -> *mut Self {
        let ffi_list = Box::new(ffi_task_list(tasks));
        Self::ok(FfiDataTag::TaskList, Box::into_raw(ffi_list) as *mut c_void)
    }

    /// Build a success result carrying a `FfiTaskPage`.
    pub(crate) fn ok_task_page(page: Page<Task>) -> *mut Self {
        let has_next = !page.is_last();
        let ffi_page = Box::new(FfiTaskPage {
            current_page: page.meta.current_page,
            last_page: page.meta.last_page,
            has_next,
            list: ffi_task_list(page.data),
        });
        Self::ok(FfiDataTag::TaskPage, Box::into_raw(ffi_page) as *mut c_void)
    }

    /// Build a success result with no data payload (e.g. delete).
    pub(crate) fn ok_empty() -> *mut Self {
        Self::ok(FfiDataTag::None, std::ptr::null_mut())
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (code, http_status) = match &err {
            ApiError::Status { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0),
            ApiError::InvalidInput(_) => (FfiErrorCode::InvalidInput, 0),
        };
        Self::err(code, http_status, err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }
}
