//! CSV task storage
//!
//! One task per record, no header:
//! `name,subject,priority,flag` where flag is `c` (completed) or `u`.

use std::path::PathBuf;

use super::model::Task;
use super::repository::{read_file, write_atomically, TaskStore};
use crate::{Error, Result};

const COMPLETED_FLAG: &str = "c";
const UNCOMPLETED_FLAG: &str = "u";
const FIELD_COUNT: usize = 4;

/// CSV file store, the default format
pub struct CsvTaskStore {
    path: PathBuf,
}

impl CsvTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn malformed(&self, line: u64, message: impl std::fmt::Display) -> Error {
        Error::Persistence(format!(
            "{}: line {}: {}",
            self.path.display(),
            line,
            message
        ))
    }

    fn parse_record(&self, line: u64, record: &csv::StringRecord) -> Result<Task> {
        if record.len() != FIELD_COUNT {
            return Err(self.malformed(
                line,
                format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
            ));
        }

        let priority_field = &record[2];
        let priority: i64 = priority_field
            .trim()
            .parse()
            .map_err(|_| self.malformed(line, format!("invalid priority '{}'", priority_field)))?;

        let completed = parse_flag(&record[3])
            .ok_or_else(|| self.malformed(line, format!("invalid completion flag '{}'", &record[3])))?;

        let task = Task::new(&record[0], &record[1], priority)
            .map_err(|e| self.malformed(line, e))?;
        Ok(task.with_completed(completed))
    }
}

fn parse_flag(field: &str) -> Option<bool> {
    match field.trim().to_ascii_lowercase().as_str() {
        COMPLETED_FLAG | "true" => Some(true),
        UNCOMPLETED_FLAG | "false" => Some(false),
        _ => None,
    }
}

impl TaskStore for CsvTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        let content = read_file(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut tasks = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let fallback_line = index as u64 + 1;
            let record = record.map_err(|e| {
                let line = e
                    .position()
                    .map(|pos| pos.line())
                    .unwrap_or(fallback_line);
                self.malformed(line, e)
            })?;
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(fallback_line);
            tasks.push(self.parse_record(line, &record)?);
        }

        tracing::debug!("Parsed {} CSV records from {:?}", tasks.len(), self.path);
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        for task in tasks {
            let priority = task.priority().to_string();
            let flag = if task.is_completed() {
                COMPLETED_FLAG
            } else {
                UNCOMPLETED_FLAG
            };
            writer
                .write_record([task.name(), task.subject(), priority.as_str(), flag])
                .map_err(|e| Error::Persistence(format!("Failed to encode task: {}", e)))?;
        }

        let content = writer
            .into_inner()
            .map_err(|e| Error::Persistence(format!("Failed to encode tasks: {}", e)))?;
        write_atomically(&self.path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskRecord;
    use tempfile::TempDir;

    fn create_test_store(content: Option<&str>) -> (CsvTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.csv");
        if let Some(content) = content {
            std::fs::write(&path, content).unwrap();
        }
        (CsvTaskStore::new(path), temp_dir)
    }

    fn expect_malformed(store: &CsvTaskStore, needle: &str) {
        match store.load() {
            Err(Error::Persistence(msg)) => {
                assert!(msg.contains(needle), "message {:?} lacks {:?}", msg, needle)
            }
            other => panic!("Expected Persistence error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_records() {
        let (store, _temp) = create_test_store(Some(
            "Essay,History,2,u\nLab Report,Chemistry,1,c\nRead,English,3,TRUE\n",
        ));

        let tasks = store.load().unwrap();
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        assert_eq!(
            records,
            vec![
                TaskRecord {
                    name: "Essay".to_string(),
                    subject: "History".to_string(),
                    priority: 2,
                    completed: false,
                },
                TaskRecord {
                    name: "Lab Report".to_string(),
                    subject: "Chemistry".to_string(),
                    priority: 1,
                    completed: true,
                },
                TaskRecord {
                    name: "Read".to_string(),
                    subject: "English".to_string(),
                    priority: 3,
                    completed: true,
                },
            ]
        );
    }

    #[test]
    fn test_load_empty_file() {
        let (store, _temp) = create_test_store(Some(""));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let (store, _temp) = create_test_store(None);
        expect_malformed(&store, "Failed to read");
    }

    #[test]
    fn test_load_non_numeric_priority() {
        let (store, _temp) = create_test_store(Some("Essay,History,abc,u\n"));
        expect_malformed(&store, "invalid priority 'abc'");
    }

    #[test]
    fn test_load_reports_line_of_bad_record() {
        let (store, _temp) = create_test_store(Some("Essay,History,1,u\nLab,Chemistry,0,u\n"));
        expect_malformed(&store, "line 2");
    }

    #[test]
    fn test_load_missing_field() {
        let (store, _temp) = create_test_store(Some("Essay,History,1\n"));
        expect_malformed(&store, "expected 4 fields, found 3");
    }

    #[test]
    fn test_load_bad_flag_and_empty_name() {
        let (store, _temp) = create_test_store(Some("Essay,History,1,maybe\n"));
        expect_malformed(&store, "invalid completion flag 'maybe'");

        let (store, _temp) = create_test_store(Some(",History,1,u\n"));
        expect_malformed(&store, "name must not be empty");
    }

    #[test]
    fn test_save_quotes_and_round_trips_awkward_names() {
        let (store, _temp) = create_test_store(None);
        let tasks = vec![
            Task::new("Read \"Dune\", Part 1", "English", 3).unwrap(),
            Task::new("Multi\nLine", "Misc", 7)
                .unwrap()
                .with_completed(true),
        ];

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        let expected: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let actual: Vec<TaskRecord> = loaded.iter().map(TaskRecord::from).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let (store, _temp) = create_test_store(Some("Old,Stuff,1,u\nMore,Stuff,2,c\n"));
        store
            .save(&[Task::new("New", "Stuff", 5).unwrap()])
            .unwrap();

        assert_eq!(read_file(&store.path).unwrap(), "New,Stuff,5,u\n");
    }
}
