//! Task model definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::importance::{ImportanceRule, PriorityThreshold};
use crate::{Error, Result};

/// Stable handle to a task held by a [`TaskCollection`](super::TaskCollection)
///
/// Ids are assigned at construction and never persisted, so a task read
/// back from disk gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of trackable work
///
/// Name, subject and priority are fixed once constructed. Only the
/// completion state changes afterwards. `Task` is not `Clone`; each
/// instance is identified by its [`TaskId`].
#[derive(Debug)]
pub struct Task {
    id: TaskId,
    name: String,
    subject: String,
    priority: i64,
    is_completed: bool,
}

impl Task {
    /// Create a new uncompleted task
    ///
    /// Fails with [`Error::InvalidArgument`] when `priority <= 0` or when
    /// the name or subject is blank.
    pub fn new(name: impl Into<String>, subject: impl Into<String>, priority: i64) -> Result<Self> {
        let name = name.into();
        let subject = subject.into();

        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("task name must not be empty".to_string()));
        }
        if subject.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "task subject must not be empty".to_string(),
            ));
        }
        if priority <= 0 {
            return Err(Error::InvalidArgument(format!(
                "priority must be > 0, got {}",
                priority
            )));
        }

        Ok(Self {
            id: TaskId::new(),
            name,
            subject,
            priority,
            is_completed: false,
        })
    }

    /// Set the completion state at construction time
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.is_completed = completed;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn mark_as_completed(&mut self) {
        self.is_completed = true;
    }

    pub fn mark_as_uncompleted(&mut self) {
        self.is_completed = false;
    }

    /// Classify the task with the default [`PriorityThreshold`] rule
    pub fn is_important(&self) -> bool {
        self.is_important_by(&PriorityThreshold::default())
    }

    pub fn is_important_by(&self, rule: &dyn ImportanceRule) -> bool {
        rule.is_important(self)
    }

    /// One-line summary used for rendering; not meant to be parsed back
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn to_record(&self) -> TaskRecord {
        TaskRecord {
            name: self.name.clone(),
            subject: self.subject.clone(),
            priority: self.priority,
            completed: self.is_completed,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} (priority {})",
            self.name, self.subject, self.priority
        )?;
        if self.is_completed {
            write!(f, " (completed)")?;
        }
        Ok(())
    }
}

/// Field-level view of a task, as it is persisted and exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub subject: String,
    pub priority: i64,
    pub completed: bool,
}

impl TaskRecord {
    /// Validate the record and build a task with a fresh id
    pub fn into_task(self) -> Result<Task> {
        Ok(Task::new(self.name, self.subject, self.priority)?.with_completed(self.completed))
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        task.to_record()
    }
}
