//! Environment-driven configuration

use std::path::PathBuf;

use crate::task::{PriorityThreshold, SortKey, DEFAULT_IMPORTANT_PRIORITY};

pub const FILE_ENV: &str = "TASK_TRACKER_FILE";
pub const IMPORTANT_PRIORITY_ENV: &str = "TASK_TRACKER_IMPORTANT_PRIORITY";
pub const SORT_ENV: &str = "TASK_TRACKER_SORT";

pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub tasks_file: PathBuf,
    pub importance: PriorityThreshold,
    pub sort: SortKey,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            importance: PriorityThreshold::default(),
            sort: SortKey::default(),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source; bad values fall back to
    /// the defaults with a warning
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let tasks_file = value(FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE));

        let max_priority = match value(IMPORTANT_PRIORITY_ENV) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => {
                    tracing::warn!(
                        "Ignoring {}={:?}, expected a positive integer",
                        IMPORTANT_PRIORITY_ENV,
                        raw
                    );
                    DEFAULT_IMPORTANT_PRIORITY
                }
            },
            None => DEFAULT_IMPORTANT_PRIORITY,
        };

        let sort = match value(SORT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring {}={:?}, unknown sort attribute", SORT_ENV, raw);
                SortKey::default()
            }),
            None => SortKey::default(),
        };

        Self {
            tasks_file,
            importance: PriorityThreshold::new(max_priority),
            sort,
        }
    }
}
