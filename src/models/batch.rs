//! Task batch model.
//!
//! A batch is the set of tasks generated together for one trial. It keeps
//! generation order; any other order is imposed later by a dispatching
//! strategy, which borrows the batch instead of rearranging it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Task, TaskId};
use crate::error::{Result, SimulationError};

/// Tasks generated for a single trial, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBatch {
    tasks: Vec<Task>,
}

impl TaskBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing task list.
    ///
    /// # Errors
    /// [`SimulationError::DuplicateTaskId`] if two tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(SimulationError::DuplicateTaskId(task.id()));
            }
        }
        Ok(Self { tasks })
    }

    /// Tasks in generation order.
    #[inline]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates tasks in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the batch has no tasks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks
            .get(id.index())
            .filter(|t| t.id() == id)
            .or_else(|| self.tasks.iter().find(|t| t.id() == id))
    }

    /// Sum of all task durations, saturating at `u64::MAX`.
    pub fn total_duration(&self) -> u64 {
        self.tasks
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.duration()))
    }
}

impl<'a> IntoIterator for &'a TaskBatch {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
