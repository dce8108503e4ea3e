//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::retry::Attempts;
use crate::utils::datetime;

/// Task completion log for Todoist
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Task completion log for Todoist", long_about = None)]
pub struct Args {
    /// REQUIRED: your Todoist API token.
    #[arg(short = 'a', long = "api-token")]
    pub api_token: Option<String>,

    /// Format YYMMDD. The day to log. Default is yesterday.
    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,

    /// Limit the number of retries if the script fails for any reason EXCEPT an
    /// invalid API token. Default behaviour is to try until the script succeeds
    /// or you force quit the script (ctrl-c).
    #[arg(short = 'r', long = "retries", allow_negative_numbers = true)]
    pub retries: Option<i64>,

    /// Read settings from this file instead of the default locations.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file to this path and exit.
    #[arg(long = "generate-config", value_name = "PATH")]
    pub generate_config: Option<PathBuf>,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Token to authenticate with, if one was given and is not empty
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|token| !token.is_empty())
    }

    /// Day to report on, relative to `today` when no date was given.
    pub fn resolve_date(&self, today: NaiveDate) -> Result<NaiveDate, chrono::ParseError> {
        match &self.date {
            Some(yymmdd) => datetime::parse_yymmdd(yymmdd),
            None => Ok(datetime::day_before(today)),
        }
    }

    pub fn attempts(&self) -> Attempts {
        Attempts::from_retry_limit(self.retries)
    }
}

/// Help text printed when no API token is supplied
pub fn help_text() -> String {
    use clap::CommandFactory;
    Args::command().render_help().to_string()
}
