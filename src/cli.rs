use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Hand-drawn to-do list in the terminal.
/// Storage defaults to ./tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "To-do list with priorities and reminders")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, default_value = "tasks.json")]
    pub db: PathBuf,

    /// Directory for the log file. Defaults to the task file's directory.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Defaults to `ui`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => match self.db.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }
}
