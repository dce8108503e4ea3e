//! Constants used throughout the application
//!
//! This module centralizes the API endpoint, pagination settings and the fixed
//! strings that end up on stdout.

// API
/// Completed-task endpoint of the Todoist Sync API
pub const COMPLETED_GET_ALL_URL: &str = "https://api.todoist.com/sync/v9/completed/get_all";
/// Number of items the API returns per page
pub const PAGE_SIZE: usize = 200;

// Retry
/// Default pause between two fetch attempts
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
/// Upper bound accepted for the configured retry delay
pub const MAX_RETRY_DELAY_SECS: u64 = 3600;

// Report output
/// Rendered in place of any field the API left empty or could not resolve
pub const MISSING_FIELD: &str = "None";
/// Separator between the fields of one report line
pub const FIELD_SEPARATOR: &str = "\t";

// Messages
pub const MSG_NO_TASKS: &str = "No\ttasks\tcompleted";
pub const MSG_RETRY_NOTICE: &str = "failed to get completed tasks. trying again in";
pub const MSG_REACH_FAILED: &str = "Failed to reach Todoist";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Files
pub const APP_DIR_NAME: &str = "todoist-log";
pub const LOCAL_CONFIG_FILE: &str = "todoist-log.toml";
pub const LOG_FILE_NAME: &str = "todoist-log.log";
