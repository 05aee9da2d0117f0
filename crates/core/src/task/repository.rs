//! Task store trait
//!
//! Defines the interface for persisting a task sequence to a flat file.

use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::csv_store::CsvTaskStore;
use super::file_store::JsonTaskStore;
use super::model::Task;
use crate::{Error, Result};

/// Storage interface for a whole task sequence
pub trait TaskStore {
    /// Read every task, in file order
    ///
    /// Aborts on the first invalid record; no partial result is returned.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored sequence with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Pick a store by file extension: `.json` is JSON, anything else CSV
pub fn store_for_path(path: impl Into<PathBuf>) -> Box<dyn TaskStore> {
    let path = path.into();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonTaskStore::new(path))
    } else {
        Box::new(CsvTaskStore::new(path))
    }
}

/// Read a whole file, mapping failures to persistence errors
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::Persistence(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Write `content` to a temp file beside `path`, then rename it into place
///
/// The destination either keeps its old content or gets all of the new
/// content.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .map_err(|e| Error::Persistence(format!("Failed to create directory: {}", e)))?;

    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4().as_hyphenated()));

    let written = std::fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });
    if let Err(err) = written {
        remove_temp(&temp_path);
        return Err(Error::Persistence(format!(
            "Failed to write temp file for {}: {}",
            path.display(),
            err
        )));
    }

    if let Err(err) = std::fs::rename(&temp_path, path) {
        remove_temp(&temp_path);
        return Err(Error::Persistence(format!(
            "Failed to replace {}: {}",
            path.display(),
            err
        )));
    }

    Ok(())
}

fn remove_temp(temp_path: &Path) {
    if let Err(err) = std::fs::remove_file(temp_path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove temp file {:?}: {}", temp_path, err);
        }
    }
}
