//! todoist-log - a log of the Todoist tasks completed on one day
//!
//! Fetches every task completed on a single local calendar day from the
//! Todoist Sync API, joins each one with its project and section names, and
//! prints the result as sorted, tab-separated lines.
//!
//! # Modules
//!
//! * [`app`] - Wiring between the command line, config, backend and report
//! * [`backend`] - Completed-task source abstraction and the Todoist client
//! * [`cli`] - Command-line arguments
//! * [`config`] - Application configuration management
//! * [`report`] - Pagination, join, sort and output of the report
//! * [`retry`] - Attempt budget and retry loop
//! * [`todoist`] - Todoist API wire types
//! * [`utils`] - Date helpers

/// Wiring between the command line, config, backend and report
pub mod app;

/// Backend abstraction for fetching completed tasks
pub mod backend;

/// Command-line argument definitions
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for diagnostics on stderr and in a log file
pub mod logger;

/// Completed-task report generation
pub mod report;

/// Retry driver
pub mod retry;

/// Todoist API wire types
pub mod todoist;

/// Utility functions for date handling
pub mod utils;
