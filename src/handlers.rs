//! The five commands behind the button bar.
//!
//! Each handler gathers what it needs through a [`Prompter`], mutates the
//! store, and saves. A cancelled prompt ends the handler there; nothing is
//! reported to the user. The caller redraws afterwards.

use std::path::Path;

use crate::db::TaskStore;
use crate::fields::{Meridiem, Priority};
use crate::task::Task;
use crate::time::to_24;
use crate::tui::dialog::Prompter;
use crate::tui::router::Command;

const REMINDER_TITLE: &str = "Set Reminder Time";

/// Run `command` against the store, saving to `path` after any mutation.
pub fn execute(command: Command, store: &mut TaskStore, path: &Path, prompter: &mut impl Prompter) {
    log::debug!("running command {command:?}");
    let changed = match command {
        Command::Add => add_task(store, prompter),
        Command::Complete => complete_task(store, prompter),
        Command::Delete => delete_task(store, prompter),
        Command::Edit => edit_task(store, prompter),
        Command::ClearCompleted => {
            clear_completed(store);
            true
        }
    };
    if changed {
        store.persist(path);
    }
}

/// Hour, minute and meridiem prompts in turn. Any cancel or an answer other
/// than AM/PM abandons the reminder.
pub fn select_time(prompter: &mut impl Prompter) -> Option<String> {
    let hour = prompter.number(REMINDER_TITLE, "Select hour (1-12):", 1, 12)?;
    let minute = prompter.number(REMINDER_TITLE, "Select minutes (0-59):", 0, 59)?;
    let meridiem = Meridiem::parse(&prompter.text(REMINDER_TITLE, "Enter AM or PM:", None)?)?;
    to_24(u32::try_from(hour).ok()?, u32::try_from(minute).ok()?, meridiem)
}

fn ask_task_number(store: &TaskStore, prompter: &mut impl Prompter, title: &str, prompt: &str) -> Option<usize> {
    if store.is_empty() {
        return None;
    }
    let number = prompter.number(title, prompt, 1, store.len() as i64)?;
    usize::try_from(number).ok()
}

pub fn add_task(store: &mut TaskStore, prompter: &mut impl Prompter) -> bool {
    let Some(desc) = prompter
        .text("New Task", "Enter task description:", None)
        .filter(|d| !d.is_empty())
    else {
        return false;
    };
    let priority = prompter
        .text("Priority", "Enter priority (Low, Medium, High):", None)
        .map(|p| Priority::from_input_or_default(&p))
        .unwrap_or_default();
    let reminder = select_time(prompter);

    log::info!("adding task {desc:?} priority={priority} reminder={reminder:?}");
    store.append(Task::new(desc, priority, reminder));
    true
}

pub fn complete_task(store: &mut TaskStore, prompter: &mut impl Prompter) -> bool {
    let Some(number) = ask_task_number(store, prompter, "Complete Task", "Enter task number:") else {
        return false;
    };
    let done = store.mark_done(number);
    if done {
        log::info!("completed task {number}");
    } else {
        log::warn!("ignoring completion of missing task {number}");
    }
    done
}

pub fn delete_task(store: &mut TaskStore, prompter: &mut impl Prompter) -> bool {
    let Some(number) = ask_task_number(store, prompter, "Delete Task", "Enter task number:") else {
        return false;
    };
    match store.remove(number) {
        Some(task) => {
            log::info!("deleted task {number} {:?}", task.desc);
            true
        }
        None => {
            log::warn!("ignoring deletion of missing task {number}");
            false
        }
    }
}

/// Description, priority and reminder are each applied on their own; a
/// cancelled or invalid answer keeps that field and moves on.
pub fn edit_task(store: &mut TaskStore, prompter: &mut impl Prompter) -> bool {
    let Some(number) = ask_task_number(store, prompter, "Edit Task", "Enter task number to edit:")
    else {
        return false;
    };
    let Some(current) = store.get(number).cloned() else {
        log::warn!("ignoring edit of missing task {number}");
        return false;
    };
    let mut task = current;

    if let Some(desc) = prompter
        .text("Edit Description", "Edit task description:", Some(&task.desc))
        .filter(|d| !d.is_empty())
    {
        task.desc = desc;
    }

    if let Some(priority) = prompter
        .text(
            "Edit Priority",
            "Edit priority (Low, Medium, High):",
            Some(task.priority.as_str()),
        )
        .and_then(|p| Priority::from_input(&p))
    {
        task.priority = priority;
    }

    let change_reminder = prompter
        .text("Edit Reminder", "Change reminder time? (yes/no):", Some("no"))
        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes"));
    if change_reminder {
        if let Some(reminder) = select_time(prompter) {
            task.reminder = reminder;
        }
    }

    log::info!("edited task {number}");
    if let Some(slot) = store.get_mut(number) {
        *slot = task;
    }
    true
}

pub fn clear_completed(store: &mut TaskStore) {
    let removed = store.clear_completed();
    log::info!("cleared {removed} completed tasks");
}
