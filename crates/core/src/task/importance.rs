//! Importance classification rules

use super::model::Task;

/// Default threshold: priorities 1 and 2 are important
pub const DEFAULT_IMPORTANT_PRIORITY: i64 = 2;

/// Decides whether a task deserves emphatic messaging
pub trait ImportanceRule {
    fn is_important(&self, task: &Task) -> bool;
}

/// Important when `priority <= max_priority`
///
/// Lower numbers are more urgent, which is also the order an ascending
/// priority sort shows them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityThreshold {
    pub max_priority: i64,
}

impl PriorityThreshold {
    pub fn new(max_priority: i64) -> Self {
        Self { max_priority }
    }
}

impl Default for PriorityThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORTANT_PRIORITY)
    }
}

impl ImportanceRule for PriorityThreshold {
    fn is_important(&self, task: &Task) -> bool {
        task.priority() <= self.max_priority
    }
}

impl<F> ImportanceRule for F
where
    F: Fn(&Task) -> bool,
{
    fn is_important(&self, task: &Task) -> bool {
        self(task)
    }
}
