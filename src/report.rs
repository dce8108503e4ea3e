//! Completed-task report for one day.
//!
//! Pages are pulled from a [`CompletedTasksApi`] until an empty page comes
//! back, every item is joined against the project and section tables of the
//! page it arrived on, and the resulting rows are printed sorted, one
//! tab-separated line each.

use std::io::Write;

use chrono::NaiveDate;

use crate::backend::{BackendError, CompletedTasksApi};
use crate::constants::{FIELD_SEPARATOR, MISSING_FIELD, MSG_NO_TASKS, MSG_REACH_FAILED, PAGE_SIZE};
use crate::todoist::{CompletedItem, CompletedPage};
use crate::utils::datetime::{format_yymmdd, DateRange};

/// Errors that end a run instead of triggering a retry.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// One line of the report.
///
/// Field order is the sort order: completion time first, then project,
/// section and content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskRecord {
    pub completed_at: String,
    pub project: String,
    pub section: String,
    pub content: String,
}

impl TaskRecord {
    /// Join `item` against the lookup tables of `page`.
    pub fn from_item(item: &CompletedItem, page: &CompletedPage) -> Self {
        Self {
            completed_at: or_missing(item.completed_at.as_deref()),
            project: or_missing(page.project_name(item.project_id.as_deref())),
            section: or_missing(page.section_name(item.section_id.as_deref())),
            content: or_missing(item.content.as_deref()),
        }
    }

    pub fn to_line(&self) -> String {
        [
            self.completed_at.as_str(),
            self.project.as_str(),
            self.section.as_str(),
            self.content.as_str(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_FIELD).to_string()
}

/// Convert every item of a page into a report row.
pub fn records_from_page(page: &CompletedPage) -> Vec<TaskRecord> {
    page.items.iter().map(|item| TaskRecord::from_item(item, page)).collect()
}

/// Offsets requested for successive pages: 0, 200, 400, ...
pub fn page_offsets() -> impl Iterator<Item = usize> {
    (0..).map(|page| page * PAGE_SIZE)
}

/// Fetch every completed task in `range`, unsorted.
///
/// Stops at the first empty page. Any backend error aborts the whole fetch.
pub fn fetch_all_records(api: &dyn CompletedTasksApi, range: &DateRange) -> Result<Vec<TaskRecord>, BackendError> {
    let mut records = Vec::new();

    for offset in page_offsets() {
        let page = api.fetch_completed_page(range, offset)?;
        if page.is_empty() {
            break;
        }
        records.extend(records_from_page(&page));
    }

    log::info!("Collected {} completed tasks from {}", records.len(), api.backend_type());
    Ok(records)
}

/// Sort records and render the report lines for `date`.
pub fn render_report(mut records: Vec<TaskRecord>, date: NaiveDate) -> Vec<String> {
    if records.is_empty() {
        return vec![format!("{}{}{}", MSG_NO_TASKS, FIELD_SEPARATOR, format_yymmdd(date))];
    }

    records.sort();
    records.iter().map(TaskRecord::to_line).collect()
}

/// Fetch, sort and print the completed tasks for `date`.
///
/// Returns `Ok(true)` once the report has been printed and `Ok(false)` after a
/// retryable failure, which is reported on `out`. A rejected API token is the
/// only fetch failure returned as an error.
pub fn print_completed_tasks<W: Write>(
    api: &dyn CompletedTasksApi,
    date: NaiveDate,
    out: &mut W,
) -> Result<bool, ReportError> {
    let range = DateRange::for_day(date);

    let records = match fetch_all_records(api, &range) {
        Ok(records) => records,
        Err(e) if !e.is_retryable() => return Err(ReportError::InvalidToken(e.to_string())),
        Err(e) => {
            log::info!("Fetch for {} failed: {}", format_yymmdd(date), e);
            writeln!(out, "{}: {}", MSG_REACH_FAILED, e)?;
            return Ok(false);
        }
    };

    for line in render_report(records, date) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(true)
}
