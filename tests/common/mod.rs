#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::json;
use todoist_log::backend::{BackendError, CompletedTasksApi};
use todoist_log::todoist::CompletedPage;
use todoist_log::utils::datetime::DateRange;

/// Backend that replays a fixed script of responses and records every call.
pub struct ScriptedBackend {
    responses: RefCell<VecDeque<Result<CompletedPage, BackendError>>>,
    calls: RefCell<Vec<(DateRange, usize)>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<Result<CompletedPage, BackendError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.calls.borrow().iter().map(|(_, offset)| *offset).collect()
    }

    pub fn calls(&self) -> Vec<(DateRange, usize)> {
        self.calls.borrow().clone()
    }
}

impl CompletedTasksApi for ScriptedBackend {
    fn backend_type(&self) -> &str {
        "scripted"
    }

    fn fetch_completed_page(&self, range: &DateRange, offset: usize) -> Result<CompletedPage, BackendError> {
        self.calls.borrow_mut().push((*range, offset));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(CompletedPage::default()))
    }
}

/// Backend whose first `failures` pagination runs fail with `error()`.
///
/// Every successful run returns a single-task page followed by an empty page.
pub struct FlakyBackend {
    failures: usize,
    error: fn() -> BackendError,
    attempts: RefCell<usize>,
}

impl FlakyBackend {
    pub fn new(failures: usize, error: fn() -> BackendError) -> Self {
        Self {
            failures,
            error,
            attempts: RefCell::new(0),
        }
    }

    /// Number of runs started, counted at offset zero
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }
}

impl CompletedTasksApi for FlakyBackend {
    fn backend_type(&self) -> &str {
        "flaky"
    }

    fn fetch_completed_page(&self, _range: &DateRange, offset: usize) -> Result<CompletedPage, BackendError> {
        if offset == 0 {
            *self.attempts.borrow_mut() += 1;
        }
        if self.attempts() <= self.failures {
            return Err((self.error)());
        }
        if offset == 0 {
            Ok(page(json!([task("2023-01-19T10:00:00.000000Z", "p1", "s1", "Water plants")])))
        } else {
            Ok(CompletedPage::default())
        }
    }
}

pub fn network_error() -> BackendError {
    BackendError::Network("connection reset by peer".to_string())
}

pub fn server_error() -> BackendError {
    BackendError::Http {
        status: 502,
        message: "Bad Gateway".to_string(),
    }
}

pub fn forbidden() -> BackendError {
    BackendError::Auth("403 Forbidden".to_string())
}

pub fn task(completed_at: &str, project_id: &str, section_id: &str, content: &str) -> serde_json::Value {
    json!({
        "completed_at": completed_at,
        "project_id": project_id,
        "section_id": section_id,
        "content": content,
        "id": "1",
        "task_id": "2",
        "user_id": "3",
    })
}

/// Page with the given items and a fixed set of projects and sections.
pub fn page(items: serde_json::Value) -> CompletedPage {
    serde_json::from_value(json!({
        "items": items,
        "projects": {
            "p1": {"name": "Home", "color": "green"},
            "p2": {"name": "Work", "color": "red"},
        },
        "sections": {
            "s1": {"name": "Garden", "project_id": "p1"},
            "s2": {"name": "Meetings", "project_id": "p2"},
        },
    }))
    .expect("valid page")
}

pub fn empty_page() -> CompletedPage {
    page(json!([]))
}

pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}
