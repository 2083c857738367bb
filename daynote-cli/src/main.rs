mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daynote_core::DateKey;
use daynote_core::daynote_config::DaynoteConfig;
use daynote_core::session::Session;
use daynote_core::storage::FileStorage;

#[derive(Parser)]
#[command(name = "daynote")]
#[command(about = "A month calendar with holidays, per-day notes and events")]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid (defaults to the current month)
    Month {
        /// Month number, 1-12
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<i32>,
    },
    /// Show holidays, events and the note for a date
    Day {
        /// Date as YEAR-MONTH-DAY, e.g. 2024-8-15 (defaults to today)
        date: Option<DateKey>,
    },
    /// Show, save or delete the note for a date
    Note {
        /// Date as YEAR-MONTH-DAY
        date: DateKey,

        /// New note text (shows the current note if omitted)
        text: Option<String>,

        #[arg(short, long, conflicts_with = "text")]
        delete: bool,
    },
    /// Add or remove events
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Browse and edit the calendar interactively (default)
    Interactive,
    /// Show config and data paths
    Config {
        /// Store notes and events in this directory from now on
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// Add an event, prompting for any missing field
    Add {
        /// Date as YEAR-MONTH-DAY
        date: DateKey,

        #[arg(long)]
        title: Option<String>,

        /// Free-form time, e.g. "10:00 AM"
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete an event by its number in `daynote day`
    Rm { date: DateKey, index: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = DaynoteConfig::load()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Month { month, year } => {
            commands::month::run(&mut open_session(&config)?, month, year)
        }
        Commands::Day { date } => {
            let mut session = open_session(&config)?;
            let date = date.unwrap_or_else(|| DateKey::from(session.state().today()));
            commands::day::run(&mut session, date)
        }
        Commands::Note { date, text, delete } => {
            commands::note::run(&mut open_session(&config)?, date, text, delete)
        }
        Commands::Event { command } => {
            let mut session = open_session(&config)?;
            match command {
                EventCommands::Add { date, title, time } => {
                    commands::event::add(&mut session, date, title, time)
                }
                EventCommands::Rm { date, index } => {
                    commands::event::remove(&mut session, date, index)
                }
            }
        }
        Commands::Interactive => commands::interactive::run(&mut open_session(&config)?),
        Commands::Config { data_dir } => commands::config::run(config, data_dir),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn open_session(config: &DaynoteConfig) -> Result<Session<FileStorage>> {
    let holidays = config.holiday_calendar()?;
    let today = chrono::Local::now().date_naive();

    log::debug!("Using data directory {}", config.data_path().display());

    Ok(Session::load(config.storage(), today, holidays))
}
