//! Task storage.
//!
//! `TaskStore` holds the ordered task list in memory and reads/writes it as a
//! single JSON array. Positions are 1-based, matching the numbers drawn next to
//! each task.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::task::Task;

/// In-memory ordered list of tasks backed by a JSON file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    #[cfg(test)]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    /// Load tasks from a JSON file.
    ///
    /// A missing, unreadable or unparseable file yields an empty store; the
    /// reason is logged but never reported to the user.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no task file at {}, starting empty", path.display());
            return TaskStore::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str::<Vec<Task>>(&buf) {
                Ok(tasks) => {
                    log::info!("loaded {} tasks from {}", tasks.len(), path.display());
                    TaskStore { tasks }
                }
                Err(e) => {
                    log::warn!("error parsing {}, starting empty: {e}", path.display());
                    TaskStore::default()
                }
            },
            Err(e) => {
                log::warn!("error reading {}, starting empty: {e}", path.display());
                TaskStore::default()
            }
        }
    }

    /// Overwrite the file with the full task list (temp file + rename).
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        log::debug!("saved {} tasks to {}", self.tasks.len(), path.display());
        Ok(())
    }

    /// Save, logging instead of returning a failure. The UI never surfaces
    /// storage errors; the in-memory list stays authoritative.
    pub fn persist(&self, path: &Path) {
        if let Err(e) = self.save(path) {
            log::error!("failed to save tasks to {}: {e}", path.display());
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Task at 1-based `number`.
    pub fn get(&self, number: usize) -> Option<&Task> {
        self.tasks.get(number.checked_sub(1)?)
    }

    pub fn get_mut(&mut self, number: usize) -> Option<&mut Task> {
        self.tasks.get_mut(number.checked_sub(1)?)
    }

    /// Remove the task at 1-based `number`; out-of-range numbers leave the list unchanged.
    pub fn remove(&mut self, number: usize) -> Option<Task> {
        let idx = number.checked_sub(1)?;
        (idx < self.tasks.len()).then(|| self.tasks.remove(idx))
    }

    /// Mark the task at 1-based `number` done. Returns false if there is no such task.
    pub fn mark_done(&mut self, number: usize) -> bool {
        match self.get_mut(number) {
            Some(task) => {
                task.done = true;
                true
            }
            None => false,
        }
    }

    /// Drop every completed task, keeping the order of the rest. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;

    fn sample() -> TaskStore {
        TaskStore::from_tasks(vec![
            Task::new("one", Priority::Low, None),
            Task::new("two", Priority::High, Some("18:45".to_string())),
            Task::new("three", Priority::Medium, None),
        ])
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = sample();
        store.mark_done(2);
        store.save(&path).unwrap();

        let loaded = TaskStore::load(&path);
        assert_eq!(loaded, store);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::load(&dir.path().join("absent.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(TaskStore::load(&path).is_empty());
    }

    #[test]
    fn test_load_backfills_legacy_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"desc":"legacy","done":false}]"#).unwrap();
        let store = TaskStore::load(&path);
        let task = store.get(1).unwrap();
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.reminder, "");
    }

    #[test]
    fn test_load_keeps_tasks_with_null_reminder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"desc":"keep me","done":false,"priority":"High","reminder":null},{"desc":"other","done":false}]"#,
        )
        .unwrap();
        let store = TaskStore::load(&path);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().desc, "keep me");
        assert_eq!(store.get(1).unwrap().reminder, "");
    }

    #[test]
    fn test_remove_rejects_out_of_range() {
        let mut store = sample();
        assert_eq!(store.remove(0), None);
        assert_eq!(store.remove(4), None);
        assert_eq!(store.len(), 3);
        assert_eq!(store.remove(2).map(|t| t.desc), Some("two".to_string()));
        let descs: Vec<_> = store.tasks().iter().map(|t| t.desc.as_str()).collect();
        assert_eq!(descs, ["one", "three"]);
    }

    #[test]
    fn test_mark_done_bounds() {
        let mut store = sample();
        assert!(!store.mark_done(0));
        assert!(!store.mark_done(9));
        assert!(store.tasks().iter().all(|t| !t.done));
        assert!(store.mark_done(3));
        assert!(store.get(3).unwrap().done);
    }

    #[test]
    fn test_clear_completed_preserves_order() {
        let mut store = sample();
        store.mark_done(1);
        store.mark_done(3);
        assert_eq!(store.clear_completed(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().desc, "two");
    }
}
