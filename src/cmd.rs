//! Command implementations for the command line.
//!
//! `ui` opens the canvas; `list` prints the same rows as plain text for
//! scripts and quick checks; `completions` emits shell completion scripts.

use std::io::{self, Write};
use std::path::Path;

use chrono::{Local, NaiveTime};
use clap::Subcommand;
use clap_complete::{generate, Shell};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::db::TaskStore;
use crate::fields::Priority;
use crate::tui::app::App;

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive to-do list (default).
    Ui,

    /// Print tasks as numbered rows. Overdue rows are marked with `!`.
    List {
        /// Only show tasks that are not done.
        #[arg(long)]
        pending: bool,
        /// Only show tasks of this priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
    },

    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the canvas, exiting with status 1 if the terminal fails.
pub fn cmd_ui(db_path: &Path) {
    if let Err(e) = run_tui(db_path) {
        log::error!("UI error: {e}");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

fn run_tui(db_path: &Path) -> io::Result<()> {
    let mut app = App::new(db_path);

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        },
    )?;

    let result = app.run(&mut terminal);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Run `setup`, calling `restore` before returning its error.
fn setup_or_restore<T>(setup: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| restore())
}

/// Rows for `list`, numbered by their position in the full list.
pub fn list_lines(store: &TaskStore, pending: bool, priority: Option<Priority>, now: NaiveTime) -> Vec<String> {
    store
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, t)| !(pending && t.done))
        .filter(|(_, t)| priority.map_or(true, |p| t.priority == p))
        .map(|(i, t)| {
            let marker = if t.is_overdue(now) { '!' } else { ' ' };
            format!("{marker} {}", t.row_label(i + 1))
        })
        .collect()
}

pub fn cmd_list(store: &TaskStore, pending: bool, priority: Option<Priority>) {
    let lines = list_lines(store, pending, priority, Local::now().time());
    if lines.is_empty() {
        println!("No tasks.");
        return;
    }
    let mut out = io::stdout().lock();
    for line in lines {
        if writeln!(out, "{line}").is_err() {
            // Closed pipe; nothing left to do.
            return;
        }
    }
}

pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
