//! Raw input handling for new tasks

use thiserror::Error;

/// Rejections of raw text before a task is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("All fields must be completed")]
    MissingField,

    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Priority must be > 0")]
    NonPositivePriority,
}

/// Validated fields for a new task
#[derive(Debug, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub subject: String,
    pub priority: i64,
}

pub fn parse_new_task(name: &str, subject: &str, priority: &str) -> Result<NewTask, InputError> {
    let name = title_case(name.trim());
    let subject = title_case(subject.trim());
    let priority = priority.trim();

    if name.is_empty() || subject.is_empty() || priority.is_empty() {
        return Err(InputError::MissingField);
    }

    let priority: i64 = priority.parse().map_err(|_| InputError::InvalidNumber)?;
    if priority <= 0 {
        return Err(InputError::NonPositivePriority);
    }

    Ok(NewTask {
        name,
        subject,
        priority,
    })
}

/// Upper-case the first letter of every word and lower-case the rest
///
/// A word starts after any non-alphabetic character, so `"o'neil's-essay"`
/// becomes `"O'Neil'S-Essay"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
