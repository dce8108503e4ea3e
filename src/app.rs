//! Application entry points shared by the binary and the tests.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::backend::todoist::TodoistBackend;
use crate::backend::CompletedTasksApi;
use crate::config::Config;
use crate::report::{print_completed_tasks, ReportError};
use crate::retry::{run_with_retries, Attempts, RetryOutcome, RetryPolicy};
use crate::utils::datetime::format_yymmdd;

/// Load the config from an explicit path, or search the default locations.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

/// Print the completed-task report for `date`, retrying on transient failures.
///
/// A rejected token or a failed write to `out` ends the run with an error.
pub fn run_report<W, S>(
    api: &dyn CompletedTasksApi,
    date: NaiveDate,
    policy: &RetryPolicy,
    out: &mut W,
    sleep: S,
) -> Result<RetryOutcome, ReportError>
where
    W: Write,
    S: FnMut(Duration),
{
    log::info!("Fetching tasks completed on {} from {}", format_yymmdd(date), api.backend_type());
    run_with_retries(policy, out, sleep, |out| print_completed_tasks(api, date, out))
}

/// Run against the real Todoist API, writing to stdout.
pub fn run(api_token: &str, date: NaiveDate, attempts: Attempts, config: &Config) -> Result<RetryOutcome> {
    let backend = TodoistBackend::with_endpoint(api_token, &config.api.endpoint)
        .context("Failed to set up the Todoist client")?;
    let policy = RetryPolicy::new(attempts, config.retry.delay());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_report(&backend, date, &policy, &mut out, std::thread::sleep)?;

    log::info!("Finished after {} attempt(s), success: {}", outcome.attempts(), outcome.is_success());
    Ok(outcome)
}
