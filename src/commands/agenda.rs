use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;
use planbook_core::TimeRange;
use planbook_core::config::GlobalConfig;
use planbook_core::constants::DEFAULT_AGENDA_DAYS;
use planbook_core::error::Error;
use planbook_core::fields::start_at;
use planbook_core::storage;

use crate::render::Render;

pub fn run(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let window = window_from_args(from, to)?;

    let config = GlobalConfig::load()?;
    let calendar = match storage::load_calendar(&config.calendar_path()) {
        Ok(calendar) => calendar,
        Err(Error::NotFound(_)) => {
            println!(
                "{}",
                "No calendar yet. Add an event with `planbook add`.".dimmed()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let occurrences = calendar.occurrences_in_range(&window);
    if occurrences.is_empty() {
        println!("{}", "Nothing scheduled in this window.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} to {}",
            window.start().format("%Y-%m-%d"),
            window.end().format("%Y-%m-%d")
        )
        .dimmed()
    );
    for occurrence in &occurrences {
        println!("  {}", occurrence.render());
    }
    Ok(())
}

/// Build the query window.
///
/// `from`/`to` are YYYY-MM-DD days taken at start of day, so the window is
/// the half-open [from, to). `from` defaults to today, `to` to `from` plus
/// `DEFAULT_AGENDA_DAYS`.
fn window_from_args(from: Option<&str>, to: Option<&str>) -> Result<TimeRange> {
    let from_dt = match from {
        Some(input) => parse_day(input)?,
        None => start_at(Local::now().date_naive(), 0, 0)?,
    };
    let to_dt = match to {
        Some(input) => parse_day(input)?,
        None => from_dt + Duration::days(DEFAULT_AGENDA_DAYS),
    };

    Ok(TimeRange::new(from_dt, to_dt)?)
}

/// Parse YYYY-MM-DD as start of day.
fn parse_day(input: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date \"{input}\". Expected YYYY-MM-DD"))?;
    Ok(start_at(date, 0, 0)?)
}
