//! Core library for Task Tracker
//!
//! This crate contains the task data model and the collection manager:
//! - Task creation and completion state
//! - Importance classification
//! - Sorting by a selectable attribute
//! - Flat-file persistence

pub mod config;
pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
