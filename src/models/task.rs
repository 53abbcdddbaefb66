//! Task model.
//!
//! A task is a single unit of work with an importance weight, an effort
//! (duration) and a due date. Tasks are immutable once created: completion
//! is recorded separately in a [`CompletionRecord`](super::CompletionRecord)
//! so ordering and scoring can reason about the same task without aliasing.
//!
//! # Time Representation
//! Durations, due dates and completion times are integer time units relative
//! to the start of a trial (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SimulationError};

/// Identity of a task within its batch.
///
/// Assigned at generation time (the generation index). Membership tests
/// ("was this task completed?") compare ids, never field values, so two
/// tasks with identical fields remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Position of the task in generation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A task to be ordered and scheduled.
///
/// # Invariant
/// `duration < due` (which implies `due >= 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    weight: u32,
    duration: u64,
    due: u64,
}

impl Task {
    /// Creates a task, checking `duration < due`.
    ///
    /// # Errors
    /// [`SimulationError::ConstraintViolation`] if `duration >= due`.
    pub fn new(id: TaskId, weight: u32, duration: u64, due: u64) -> Result<Self> {
        if duration >= due {
            return Err(SimulationError::ConstraintViolation {
                task: id,
                duration,
                due,
            });
        }
        Ok(Self {
            id,
            weight,
            duration,
            due,
        })
    }

    /// Task identity.
    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Importance (higher = more important).
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Effort required to complete the task.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Latest completion time that still counts as in time.
    #[inline]
    pub fn due(&self) -> u64 {
        self.due
    }

    /// Whether completing at `done` meets the due date.
    #[inline]
    pub fn is_in_time(&self, done: u64) -> bool {
        done <= self.due
    }
}
