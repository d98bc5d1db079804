//! Command-line entry point.
//!
//! Each invocation opens the journal, turns the subcommand into a short
//! sequence of events, dispatches them through the session and prints the
//! outcome. Notices go to stderr, views and exports to stdout. Any error
//! notice makes the process exit with a failure code.

mod cli;

use chrono::Local;
use clap::Parser;
use cli::{Cli, Command, ThemeChoice};
use mood_journal::app::{Download, Outcome, Session};
use mood_journal::observability::init_tracing;
use mood_journal::query::SortMode;
use mood_journal::ui::{render, Theme, View};
use mood_journal::{Config, Event, NoticeLevel, Result, ThemeMode};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_COLUMNS: usize = 80;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// What a subcommand asks of the session.
struct Plan {
    events: Vec<Event>,
    view: Option<View>,
}

impl Plan {
    fn events(events: Vec<Event>) -> Self {
        Self { events, view: None }
    }

    fn view(events: Vec<Event>, view: View) -> Self {
        Self {
            events,
            view: Some(view),
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    init_tracing(&config, cli.verbose);
    let _span = tracing::debug_span!("run").entered();

    let (mut session, mut outcome) = mood_journal::initialize(&config);

    let command = cli.command.clone();
    if let Command::Clear { yes: false } = command {
        print_outcome(&outcome);
        eprintln!("warning: refusing to delete every entry without --yes");
        return Ok(ExitCode::FAILURE);
    }
    if let Command::Calendar { days: Some(days) } = command {
        session.state_mut().calendar_days = days;
    }

    let plan = plan_for(command);
    outcome.merge(session.dispatch_all(plan.events));
    print_outcome(&outcome);

    for download in &outcome.downloads {
        write_download(download, export_target(&cli))?;
    }

    if let Command::Theme { .. } = cli.command {
        println!("{}", session.state().theme);
    }

    if let Some(view) = plan.view {
        print_view(&session, view, !cli.no_color)?;
    }

    Ok(if outcome.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn plan_for(command: Command) -> Plan {
    match command {
        Command::Log { mood, note, tags } => {
            let mut events = vec![Event::SelectMood(mood)];
            if let Some(note) = note {
                events.push(Event::SetNote(note));
            }
            events.extend(tags.into_iter().map(Event::AddTag));
            events.push(Event::SubmitEntry);
            Plan::events(events)
        }
        Command::List { mood, search, sort } => {
            let mut events = vec![
                Event::SetMoodFilter(mood),
                Event::SetSearch(search.unwrap_or_default()),
            ];
            if let Some(sort) = sort {
                events.push(Event::SetSort(SortMode::parse(&sort)));
            }
            Plan::view(events, View::History)
        }
        Command::Stats => Plan::view(vec![], View::Stats),
        Command::Chart => Plan::view(vec![], View::Chart),
        Command::Calendar { .. } => Plan::view(vec![], View::Calendar),
        Command::Delete { id } => Plan::events(vec![Event::DeleteEntry { id }]),
        Command::Clear { .. } => Plan::events(vec![Event::ClearAll]),
        Command::Import { file } => {
            let event = match std::fs::read_to_string(&file) {
                Ok(contents) => Event::ImportLoaded { contents },
                Err(e) => Event::ImportFailed {
                    error: format!("{}: {e}", file.display()),
                },
            };
            Plan::events(vec![event])
        }
        Command::Export { .. } => Plan::events(vec![Event::ExportRequested]),
        Command::Theme { choice } => Plan::events(match choice {
            None => vec![],
            Some(ThemeChoice::Light) => vec![Event::SetTheme(ThemeMode::Light)],
            Some(ThemeChoice::Dark) => vec![Event::SetTheme(ThemeMode::Dark)],
            Some(ThemeChoice::Toggle) => vec![Event::ToggleTheme],
        }),
    }
}

fn print_outcome(outcome: &Outcome) {
    for notice in &outcome.notices {
        match notice.level {
            NoticeLevel::Info => eprintln!("{}", notice.message),
            NoticeLevel::Warning | NoticeLevel::Error => eprintln!("{notice}"),
        }
    }
}

fn export_target(cli: &Cli) -> Option<&Path> {
    match &cli.command {
        Command::Export { output } => output.as_deref(),
        _ => None,
    }
}

/// Writes a download to `target` (a file, or a directory to put it in), or stdout.
fn write_download(download: &Download, target: Option<&Path>) -> Result<()> {
    let Some(target) = target else {
        println!("{}", download.contents);
        return Ok(());
    };

    let path = if target.is_dir() {
        target.join(&download.file_name)
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, &download.contents)?;
    eprintln!("Exported to {}", path.display());
    Ok(())
}

fn print_view(session: &Session, view: View, color: bool) -> Result<()> {
    let color = color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
    let theme = Theme::for_mode(session.state().theme)?.with_color(color);
    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS);

    print!("{}", render(session.state(), view, &theme, Local::now(), cols));
    Ok(())
}
