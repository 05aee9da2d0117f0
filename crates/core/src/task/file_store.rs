//! JSON task storage
//!
//! Stores tasks as a pretty-printed JSON array of records.

use std::path::PathBuf;

use super::model::{Task, TaskRecord};
use super::repository::{read_file, write_atomically, TaskStore};
use crate::{Error, Result};

/// JSON file store, used for `.json` paths
pub struct JsonTaskStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        let content = read_file(&self.path)?;
        let records: Vec<TaskRecord> = serde_json::from_str(&content).map_err(|e| {
            Error::Persistence(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.into_task().map_err(|e| {
                    Error::Persistence(format!(
                        "{}: record {}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| Error::Persistence(format!("Failed to serialize tasks: {}", e)))?;
        write_atomically(&self.path, content.as_bytes())
    }
}
