//! Logging setup.
//!
//! Diagnostics go through the `log` facade and are dispatched by `fern` to
//! stderr and, when enabled in the config, to a log file. Stdout is reserved
//! for the report itself.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Resolved logging settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Combine the config file settings with the `-v` count from the command line.
    pub fn from_config(config: &LoggingConfig, verbosity: u8) -> Result<Self> {
        let configured = config.level_filter()?;
        let level = configured.max(Self::verbosity_level(verbosity));
        let log_file = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        Ok(Self { level, log_file })
    }

    /// Level requested by repeated `-v` flags
    pub fn verbosity_level(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Off,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine a directory for the log file"))
    }

    /// Build the fern dispatch without installing it
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(std::io::stderr());

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend
    pub fn init(&self) -> Result<()> {
        self.dispatch()?.apply().context("Failed to install logger")?;
        Ok(())
    }
}
