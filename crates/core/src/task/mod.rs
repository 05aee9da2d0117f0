//! Task module
//!
//! This module contains the task model, the owning collection and the
//! flat-file stores behind it.

mod collection;
mod csv_store;
mod file_store;
mod importance;
mod model;
mod repository;
mod sort;

pub use collection::TaskCollection;
pub use csv_store::CsvTaskStore;
pub use file_store::JsonTaskStore;
pub use importance::{ImportanceRule, PriorityThreshold, DEFAULT_IMPORTANT_PRIORITY};
pub use model::*;
pub use repository::{store_for_path, TaskStore};
pub use sort::SortKey;
