//! In-memory task collection.
//!
//! The catalog is the task-lookup collaborator around the engine: it owns
//! the caller's tasks for the duration of a session, answers lookups by id,
//! and derives the usual views (incomplete, completed, overdue, by tag) and
//! dashboard statistics. It performs no persistence.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::Task;

/// Dashboard statistics over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub incomplete: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// An owning collection of tasks with id lookup and filtered views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove a task by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
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

    /// Set the done flag on a task. Returns whether the task exists.
    pub fn set_done(&mut self, id: Uuid, done: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    /// Flip the done flag on a task. Returns whether the task exists.
    pub fn toggle_done(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Tasks still waiting to be scheduled.
    pub fn incomplete(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.done).collect()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.done).collect()
    }

    /// Unfinished tasks whose due timestamp has passed.
    pub fn overdue(&self, now: NaiveDateTime) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_overdue(now))
            .collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.tags.contains(tag))
            .collect()
    }

    /// Group tasks under each of their tags.
    pub fn by_tag(&self) -> BTreeMap<&str, Vec<&Task>> {
        let mut grouped: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
        for task in &self.tasks {
            for tag in &task.tags {
                grouped.entry(tag.as_str()).or_default().push(task);
            }
        }
        grouped
    }

    /// Every distinct tag in the catalog.
    pub fn all_tags(&self) -> BTreeSet<&str> {
        self.tasks
            .iter()
            .flat_map(|task| task.tags.iter().map(String::as_str))
            .collect()
    }

    pub fn summary(&self, now: NaiveDateTime) -> TaskSummary {
        TaskSummary {
            total: self.tasks.len(),
            incomplete: self.incomplete().len(),
            completed: self.completed().len(),
            overdue: self.overdue(now).len(),
        }
    }
}

impl FromIterator<Task> for TaskCatalog {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
