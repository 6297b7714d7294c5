//! Colored terminal rendering for core types.

use owo_colors::OwoColorize;
use planbook_core::event::{Event, EventKind};

/// Extension trait for colored terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let when = self.start.format("%Y-%m-%d %H:%M").to_string();

        let title = match &self.kind {
            EventKind::Appointment => self.title.as_str().cyan().to_string(),
            EventKind::Meeting { .. } => self.title.as_str().magenta().to_string(),
            EventKind::Birthday { .. } => self.title.as_str().yellow().to_string(),
            EventKind::Periodic { .. } => self.title.as_str().blue().to_string(),
        };

        let details = match &self.kind {
            EventKind::Appointment => String::new(),
            EventKind::Meeting {
                location,
                participants,
            } => format!(" at {} with {}", location, participants),
            EventKind::Birthday { celebrant } => {
                if celebrant.is_empty() {
                    String::new()
                } else {
                    format!(" for {}", celebrant)
                }
            }
            EventKind::Periodic { interval_days } => format!(" every {} day(s)", interval_days),
        };

        format!(
            "{} {} {}{}",
            when.dimmed(),
            title,
            format!("({})", self.owner).dimmed(),
            details
        )
    }
}
