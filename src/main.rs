mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::add::AddCommand;

#[derive(Parser)]
#[command(name = "planbook")]
#[command(about = "Manage your personal calendar: events, agendas and conflicts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    Add {
        #[command(subcommand)]
        kind: AddCommand,
    },
    /// Show occurrences inside a time window
    Agenda {
        /// Start of the window (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<String>,

        /// End of the window, exclusive (YYYY-MM-DD), defaults to from + 30 days
        #[arg(long)]
        to: Option<String>,
    },
    /// List every stored event with its id
    List,
    /// Remove an event by id
    Remove { id: String },
    /// Create a user account
    Register { username: Option<String> },
    /// Log in and record the session
    Login { username: Option<String> },
    /// Forget the recorded session
    Logout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { kind } => commands::add::run(kind),
        Commands::Agenda { from, to } => commands::agenda::run(from.as_deref(), to.as_deref()),
        Commands::List => commands::list::run(),
        Commands::Remove { id } => commands::remove::run(&id),
        Commands::Register { username } => commands::account::register(username),
        Commands::Login { username } => commands::account::login(username),
        Commands::Logout => commands::account::logout(),
    }
}
