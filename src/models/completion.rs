use serde::{Deserialize, Serialize};

use super::TaskId;

/// Records that a task was completed during a trial.
///
/// `done` is the cumulative elapsed time at which the task finished, so it is
/// never smaller than the task's own duration. A task without a record was
/// never completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Completed task.
    pub task: TaskId,
    /// Elapsed time at completion.
    pub done: u64,
}

impl CompletionRecord {
    /// Creates a completion record.
    pub fn new(task: TaskId, done: u64) -> Self {
        Self { task, done }
    }
}
