//! Sort keys for task listings

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::model::Task;
use crate::Error;

/// Attribute a task collection can be ordered by
///
/// All keys sort ascending: uncompleted before completed, lowest priority
/// number first, names and subjects by case-sensitive string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Completed,
    Priority,
    Subject,
    Name,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Completed
    }
}

impl SortKey {
    /// Every key, in the alphabetical order of its label
    pub const ALL: [SortKey; 4] = [
        SortKey::Completed,
        SortKey::Name,
        SortKey::Priority,
        SortKey::Subject,
    ];

    /// User-facing labels, alphabetical; the first one is the default
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(SortKey::label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Priority => "Priority",
            Self::Subject => "Subject",
            Self::Name => "Name",
        }
    }

    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Completed => compare_completed(a, b),
            Self::Priority => compare_priority(a, b),
            Self::Subject => compare_subject(a, b),
            Self::Name => compare_name(a, b),
        }
    }
}

fn compare_completed(a: &Task, b: &Task) -> Ordering {
    a.is_completed().cmp(&b.is_completed())
}

fn compare_priority(a: &Task, b: &Task) -> Ordering {
    a.priority().cmp(&b.priority())
}

fn compare_subject(a: &Task, b: &Task) -> Ordering {
    a.subject().cmp(b.subject())
}

fn compare_name(a: &Task, b: &Task) -> Ordering {
    a.name().cmp(b.name())
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    /// Accepts the user-facing labels in any case, plus the field names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" | "is_completed" => Ok(Self::Completed),
            "priority" => Ok(Self::Priority),
            "subject" => Ok(Self::Subject),
            "name" => Ok(Self::Name),
            _ => Err(Error::UnknownAttribute(s.to_string())),
        }
    }
}
