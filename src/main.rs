use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use todoist_log::app;
use todoist_log::cli::{self, Args};
use todoist_log::config::Config;
use todoist_log::logger::Logger;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.generate_config {
        Config::generate_default_config(path)?;
        return Ok(());
    }

    // Without a token there is nothing to fetch
    let Some(api_token) = args.api_token() else {
        print!("{}", cli::help_text());
        return Ok(());
    };

    let config = app::load_config(args.config.as_deref())?;
    Logger::from_config(&config.logging, args.verbose)?.init()?;

    let date = args
        .resolve_date(Local::now().date_naive())
        .with_context(|| format!("Invalid date '{}', expected YYMMDD", args.date.as_deref().unwrap_or_default()))?;

    app::run(api_token, date, args.attempts(), &config)?;

    Ok(())
}
