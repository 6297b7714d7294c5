use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};
use dialoguer::Input;
use owo_colors::OwoColorize;
use planbook_core::config::GlobalConfig;
use planbook_core::error::Error;
use planbook_core::event::{Event, EventKind};
use planbook_core::fields::{EventDuration, Location, Owner, Participants, Title};
use planbook_core::{Calendar, storage};

/// Flags shared by every event kind.
#[derive(Args)]
pub struct CommonArgs {
    /// Event title
    pub title: Option<String>,

    /// Start date and time, e.g. "2025-06-01 14:30"
    #[arg(short, long)]
    pub start: Option<String>,

    /// How long the event lasts, e.g. "45m" or "1h30m"
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Event owner; defaults to the logged-in user
    #[arg(short, long)]
    pub owner: Option<String>,
}

#[derive(Subcommand)]
pub enum AddCommand {
    /// A single point-in-time event
    Appointment {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// A single event with a location and participants
    Meeting {
        #[command(flatten)]
        common: CommonArgs,

        /// Where the meeting takes place
        #[arg(short, long)]
        location: Option<String>,

        /// Comma-separated participant names
        #[arg(short, long)]
        participants: Option<String>,
    },
    /// A birthday celebration
    Birthday {
        #[command(flatten)]
        common: CommonArgs,

        /// Who is being celebrated
        #[arg(short, long)]
        celebrant: Option<String>,
    },
    /// An event repeating every N days
    Periodic {
        #[command(flatten)]
        common: CommonArgs,

        /// Repeat interval in days
        #[arg(short, long)]
        every: Option<u32>,
    },
}

pub fn run(command: AddCommand) -> Result<()> {
    let config = GlobalConfig::load()?;

    let (common, kind) = match command {
        AddCommand::Appointment { common } => (common, EventKind::Appointment),
        AddCommand::Meeting {
            common,
            location,
            participants,
        } => {
            let location = Location::new(or_prompt(location, "  Where?")?)?;
            let participants = Participants::new(split_names(&or_prompt(
                participants,
                "  Participants (comma-separated)",
            )?))?;
            (
                common,
                EventKind::Meeting {
                    location,
                    participants,
                },
            )
        }
        AddCommand::Birthday { common, celebrant } => {
            let celebrant = match celebrant {
                Some(name) => name,
                None => prompt_optional("  Who is celebrated? (skip)")?,
            };
            (common, EventKind::Birthday { celebrant })
        }
        AddCommand::Periodic { common, every } => {
            let interval_days = match every {
                Some(days) => days,
                None => prompt_with_retry("  Repeat every how many days?", parse_interval)?,
            };
            (common, EventKind::Periodic { interval_days })
        }
    };

    let title = Title::new(match common.title {
        Some(title) => title,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    })?;

    let start = match common.start {
        Some(input) => parse_start(&input)?,
        None => prompt_with_retry("  When? (YYYY-MM-DD HH:MM)", parse_start)?,
    };

    let minutes = match common.duration {
        Some(input) => parse_duration_minutes(&input)?,
        None => prompt_with_retry("  How long? (e.g. 1h)", parse_duration_minutes)?,
    };
    let duration = EventDuration::minutes(minutes)?;

    let owner = Owner::new(resolve_owner(common.owner, &config)?)?;

    let event = Event::new(title, start, duration, owner, kind);
    let created = event.clone();

    let path = config.calendar_path();
    let mut calendar = match storage::load_calendar(&path) {
        Ok(calendar) => calendar,
        Err(Error::NotFound(_)) => Calendar::new(),
        Err(err) => return Err(err.into()),
    };

    match calendar.add(event) {
        Ok(()) => {}
        Err(Error::Conflict { event, conflicting }) => {
            eprintln!(
                "{}",
                format!("Cannot add '{}': it overlaps:", event.title).red()
            );
            for existing in &conflicting {
                eprintln!("  - {}", existing.describe());
            }
            bail!("event not added");
        }
        Err(err) => return Err(err.into()),
    }

    storage::save_calendar(&path, &calendar)?;

    println!("{}", format!("Added: {}", created.describe()).green());
    println!("  {}", format!("id: {}", created.id).dimmed());
    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn prompt_optional(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}

/// Parse "YYYY-MM-DD HH:MM" (a T separator also works).
fn parse_start(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(start) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(start);
        }
    }
    bail!("Could not parse date/time \"{input}\". Expected YYYY-MM-DD HH:MM")
}

/// Parse a human duration ("45m", "1h30m") into whole minutes.
fn parse_duration_minutes(input: &str) -> Result<u32> {
    let parsed = humantime::parse_duration(input.trim())
        .map_err(|e| anyhow::anyhow!("Could not parse duration \"{input}\": {e}"))?;

    let minutes = parsed.as_secs() / 60;
    if minutes == 0 {
        bail!("Duration must be at least one minute");
    }
    u32::try_from(minutes).context("Duration too large")
}

fn parse_interval(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Interval must be a whole number of days"))
}

fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn resolve_owner(flag: Option<String>, config: &GlobalConfig) -> Result<String> {
    if let Some(owner) = flag {
        return Ok(owner);
    }
    if let Some(user) = &config.current_user {
        return Ok(user.clone());
    }
    bail!("No owner: log in with `planbook login` or pass --owner")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_start_space_separator() {
        let start = parse_start("2025-06-01 14:30").unwrap();
        assert_eq!(
            start,
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_start_t_separator() {
        assert!(parse_start("2025-06-01T14:30").is_ok());
    }

    #[test]
    fn parse_start_rejects_garbage() {
        assert!(parse_start("next tuesday").is_err());
        assert!(parse_start("2025-13-01 10:00").is_err());
        assert!(parse_start("2025-06-01 25:00").is_err());
    }

    #[test]
    fn parse_duration_minutes_units() {
        assert_eq!(parse_duration_minutes("45m").unwrap(), 45);
        assert_eq!(parse_duration_minutes("1h30m").unwrap(), 90);
        assert_eq!(parse_duration_minutes("2h").unwrap(), 120);
    }

    #[test]
    fn parse_duration_rejects_sub_minute_and_garbage() {
        assert!(parse_duration_minutes("30s").is_err());
        assert!(parse_duration_minutes("0m").is_err());
        assert!(parse_duration_minutes("soon").is_err());
    }

    #[test]
    fn parse_interval_rejects_non_numbers() {
        assert_eq!(parse_interval("7").unwrap(), 7);
        assert!(parse_interval("-3").is_err());
        assert!(parse_interval("weekly").is_err());
    }

    #[test]
    fn split_names_trims_and_drops_empties() {
        assert_eq!(
            split_names("Alice, Bob , ,Carol"),
            vec!["Alice", "Bob", "Carol"]
        );
        assert!(split_names("  ").is_empty());
    }
}
