//! Date and time utility functions
//!
//! The report is keyed by a single local calendar day. Users name that day in
//! the compact `YYMMDD` form, while the API expects naive ISO timestamps for
//! the start and end of the day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Compact date format accepted on the command line and echoed in the report
pub const YYMMDD_FORMAT: &str = "%y%m%d";

/// Timestamp format the completed-task endpoint expects for `since`/`until`
pub const API_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a date string in YYMMDD format to NaiveDate
///
/// Anything other than exactly six digits naming a real date is rejected.
pub fn parse_yymmdd(yymmdd: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(yymmdd, YYMMDD_FORMAT)
}

/// Format a NaiveDate to YYMMDD string
pub fn format_yymmdd(d: NaiveDate) -> String {
    d.format(YYMMDD_FORMAT).to_string()
}

/// The local calendar day before `today`
pub fn day_before(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// First and last second of one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub since: NaiveDateTime,
    pub until: NaiveDateTime,
}

impl DateRange {
    /// Build the range covering `date` from 00:00:00 through 23:59:59
    pub fn for_day(date: NaiveDate) -> Self {
        let since = date.and_time(NaiveTime::MIN);
        Self {
            since,
            until: since + Duration::days(1) - Duration::seconds(1),
        }
    }

    /// The day this range covers
    pub fn date(&self) -> NaiveDate {
        self.since.date()
    }

    pub fn since_param(&self) -> String {
        self.since.format(API_DATETIME_FORMAT).to_string()
    }

    pub fn until_param(&self) -> String {
        self.until.format(API_DATETIME_FORMAT).to_string()
    }
}
