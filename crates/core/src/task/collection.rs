//! Task collection
//!
//! Owns every task, keeps them in the last-applied sort order and handles
//! loading and saving the whole sequence.

use std::path::Path;

use super::importance::ImportanceRule;
use super::model::{Task, TaskId};
use super::repository::{store_for_path, TaskStore};
use super::sort::SortKey;
use crate::{Error, Result};

/// Ordered, owning collection of tasks
///
/// Insertion order is kept until the first sort; after that the order is
/// whatever the last sort produced.
#[derive(Debug, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a store, propagating any load failure
    pub fn from_store(store: &dyn TaskStore) -> Result<Self> {
        Ok(Self {
            tasks: store.load()?,
        })
    }

    /// Append a task and return a confirmation message for the user
    pub fn add(&mut self, task: Task) -> String {
        let message = format!(
            "{} ({}, priority {}) added to tasks.",
            task.name(),
            task.subject(),
            task.priority()
        );
        tracing::debug!(id = %task.id(), "Added task {:?}", task.name());
        self.tasks.push(task);
        message
    }

    /// Remove a task by id, returning it
    ///
    /// Removing a task that is not in the collection is an error.
    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        let index = self.position(id).ok_or(Error::TaskNotFound(id))?;
        let task = self.tasks.remove(index);
        tracing::debug!(id = %id, "Removed task {:?}", task.name());
        Ok(task)
    }

    /// Remove every completed task, keeping the relative order of the rest
    pub fn remove_completed(&mut self) -> Vec<Task> {
        let (completed, remaining): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(Task::is_completed);
        self.tasks = remaining;
        tracing::debug!("Removed {} completed tasks", completed.len());
        completed
    }

    /// Stable in-place sort by a single attribute
    pub fn sort(&mut self, key: SortKey) {
        self.tasks.sort_by(|a, b| key.compare(a, b));
        tracing::debug!("Sorted {} tasks by {}", self.tasks.len(), key);
    }

    /// Sort by a caller-supplied label such as `"Priority"`
    ///
    /// An unknown label fails with [`Error::UnknownAttribute`] and leaves
    /// the order untouched.
    pub fn sort_by_label(&mut self, label: &str) -> Result<()> {
        let key: SortKey = label.parse()?;
        self.sort(key);
        Ok(())
    }

    /// Flip a task's completion state and describe the change
    pub fn toggle_completion(&mut self, id: TaskId, rule: &dyn ImportanceRule) -> Result<String> {
        let task = self.get_mut(id).ok_or(Error::TaskNotFound(id))?;

        let message = if task.is_completed() {
            task.mark_as_uncompleted();
            let mut message = format!("You need to complete {}.", task.name());
            if task.is_important_by(rule) {
                message.push_str(" Get to work!");
            }
            message
        } else {
            task.mark_as_completed();
            let mut message = format!("You completed {}.", task.name());
            if task.is_important_by(rule) {
                message.push_str(" Great work!");
            }
            message
        };

        tracing::debug!(id = %id, completed = task.is_completed(), "Toggled task");
        Ok(message)
    }

    pub fn get_num_of_uncompleted_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed()).count()
    }

    /// Summary shown above the task list
    pub fn summary_line(&self) -> String {
        format!("Tasks to complete: {}", self.get_num_of_uncompleted_tasks())
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the contents with the tasks stored at `path`
    ///
    /// The format is picked from the extension. On failure the current
    /// contents are kept as they were.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.load_from(store_for_path(path).as_ref())?;
        tracing::info!("Loaded {} tasks from {:?}", self.tasks.len(), path);
        Ok(())
    }

    pub fn load_from(&mut self, store: &dyn TaskStore) -> Result<()> {
        let loaded = store.load()?;
        self.tasks = loaded;
        Ok(())
    }

    /// Write every task to `path`, overwriting any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.save_to(store_for_path(path).as_ref())?;
        tracing::info!("Saved {} tasks to {:?}", self.tasks.len(), path);
        Ok(())
    }

    pub fn save_to(&self, store: &dyn TaskStore) -> Result<()> {
        store.save(&self.tasks)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
