use anyhow::Result;
use owo_colors::OwoColorize;
use planbook_core::config::GlobalConfig;
use planbook_core::error::Error;
use planbook_core::storage;

use crate::render::Render;

pub fn run() -> Result<()> {
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

    let events = calendar.events();
    if events.is_empty() {
        println!("{}", "No events.".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
        println!("    {}", format!("id: {}", event.id).dimmed());
    }
    Ok(())
}
