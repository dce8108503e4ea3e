//! Backend abstraction for fetching completed tasks.
//!
//! The report only needs one remote operation: fetch a page of completed
//! tasks for a day range at a given offset. Keeping it behind a trait lets the
//! fetcher and the retry driver run against scripted backends.

use crate::todoist::CompletedPage;
use crate::utils::datetime::DateRange;

pub mod todoist;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl BackendError {
    /// Whether retrying the same request could succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, BackendError::Auth(_))
    }
}

/// Source of completed-task pages.
pub trait CompletedTasksApi {
    /// Returns the backend type identifier (e.g., "todoist").
    fn backend_type(&self) -> &str;

    /// Fetch the page of tasks completed within `range`, skipping `offset` items.
    fn fetch_completed_page(&self, range: &DateRange, offset: usize) -> Result<CompletedPage, BackendError>;
}
