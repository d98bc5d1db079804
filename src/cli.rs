use clap::{value_parser, Parser, Subcommand, ValueEnum};
use mood_journal::app::MAX_CALENDAR_DAYS;
use mood_journal::query::MoodFilter;
use mood_journal::Mood;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Directory holding journal.json
    #[arg(long, global = true, env = "MOOD_JOURNAL_DIR")]
    pub data_dir: Option<String>,

    /// Config file (default: ~/.config/mood-journal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Record how you feel
    Log {
        /// amazing, good, neutral, stressed or terrible
        mood: Mood,

        /// Free-text note (up to 500 characters)
        #[arg(long, short)]
        note: Option<String>,

        /// Tag, repeatable (up to 5)
        #[arg(long = "tag", short)]
        tags: Vec<String>,
    },
    /// Show entries
    List {
        /// Only entries with this mood ("all" for every mood)
        #[arg(long, short, default_value = "all")]
        mood: MoodFilter,

        /// Match notes, mood names and tags
        #[arg(long, short)]
        search: Option<String>,

        /// newest, oldest, mood-best or mood-worst
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show totals, streak and the most common mood
    Stats,
    /// Show the mood distribution
    Chart,
    /// Show a day-by-day heat-strip
    Calendar {
        /// Number of days ending today
        #[arg(long, short, value_parser = value_parser!(u32).range(1..=i64::from(MAX_CALENDAR_DAYS)))]
        days: Option<u32>,
    },
    /// Delete an entry by id
    Delete {
        id: i64,
    },
    /// Delete every entry
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },
    /// Prepend entries from a JSON export
    Import {
        file: PathBuf,
    },
    /// Write all entries as JSON
    Export {
        /// Output file or directory (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show or change the color theme
    Theme {
        choice: Option<ThemeChoice>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}
