use anyhow::Result;
use owo_colors::OwoColorize;
use planbook_core::config::GlobalConfig;
use planbook_core::error::Error;
use planbook_core::fields::EventId;
use planbook_core::storage;

pub fn run(id: &str) -> Result<()> {
    let id = EventId::new(id)?;

    let config = GlobalConfig::load()?;
    let path = config.calendar_path();

    let mut calendar = match storage::load_calendar(&path) {
        Ok(calendar) => calendar,
        Err(Error::NotFound(_)) => {
            println!("{}", "No calendar yet, nothing to remove.".dimmed());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if calendar.remove(&id) {
        storage::save_calendar(&path, &calendar)?;
        println!("{}", "Event removed.".green());
    } else {
        println!("{}", format!("No event with id {}", id).yellow());
    }
    Ok(())
}
