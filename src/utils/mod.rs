//! Utility modules for todoist-log.
//!
//! - [`datetime`] - `YYMMDD` parsing and formatting, and the day range sent to the API

pub mod datetime;
