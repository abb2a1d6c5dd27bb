//! # todo - a hand-drawn to-do list in the terminal
//!
//! Tasks are drawn onto a fixed 800 x 550 canvas: a title, a bar of five
//! buttons and one coloured row per task. Click a button (or press its
//! shortcut) and answer the prompts that follow.
//!
//! ## Key Features
//!
//! - **Priorities**: Low, Medium and High rows are drawn green, orange and red.
//! - **Reminders**: an optional time of day; open tasks past it turn dark red.
//! - **Plain storage**: a single JSON array in `tasks.json`, rewritten after every change.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the list in ./tasks.json
//! todo
//!
//! # Use another file
//! todo --db ~/notes/home.json
//!
//! # Print open tasks without opening the canvas
//! todo list --pending
//! ```
//!
//! ## Controls
//!
//! | Button | Key |
//! |---|---|
//! | Add Task | `a` |
//! | Complete Task | `c` |
//! | Delete Task | `d` |
//! | Edit Task | `e` |
//! | Clear Completed | `x` |
//!
//! `Esc` saves and quits. Inside a prompt, `Enter` confirms and `Esc` cancels.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod fields;
pub mod handlers;
pub mod logging;
pub mod task;
pub mod time;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod dialog;
    pub mod input;
    pub mod router;
    pub mod scene;
    pub mod surface;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use db::TaskStore;

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init_logging(&cli.resolved_log_dir()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => cmd_ui(&cli.db),
        Commands::List { pending, priority } => cmd_list(&TaskStore::load(&cli.db), pending, priority),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
