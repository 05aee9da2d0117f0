//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown sort attribute: {0}")]
    UnknownAttribute(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Persistence error: {0}")]
    Persistence(String),
}
