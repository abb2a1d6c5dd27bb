//! Task data structure.
//!
//! This module defines the `Task` record persisted to the task file and the
//! presentation helpers shared by the canvas and the plain `list` output.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::Priority;
use crate::time::{is_overdue, parse_24, to_12};

/// A single to-do item.
///
/// `priority` and `reminder` default when absent so files written before those
/// fields existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub desc: String,
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    /// `HH:MM` on a 24-hour clock, or empty when no reminder is set.
    #[serde(default, deserialize_with = "reminder_or_empty")]
    pub reminder: String,
}

impl Task {
    /// Create an open task.
    pub fn new(desc: impl Into<String>, priority: Priority, reminder: Option<String>) -> Self {
        Task {
            desc: desc.into(),
            done: false,
            priority,
            reminder: reminder.unwrap_or_default(),
        }
    }

    /// An open task whose reminder time has passed. Completed tasks are never overdue.
    pub fn is_overdue(&self, now: NaiveTime) -> bool {
        !self.done && is_overdue(&self.reminder, now)
    }

    /// Row text for the task at 1-based position `number`.
    pub fn row_label(&self, number: usize) -> String {
        let status = if self.done { '✔' } else { '✗' };
        let mut label = format!(
            "{}. [{}] [{}] {}",
            number,
            status,
            self.priority.initial(),
            self.desc
        );
        if let Some(at) = to_12(&self.reminder) {
            label.push_str(&format!(" (Remind at: {at})"));
        }
        label
    }
}

fn reminder_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_empty() || parse_24(&raw).is_some() {
        Ok(raw)
    } else {
        log::warn!("dropping malformed reminder {raw:?} from task file");
        Ok(String::new())
    }
}
