//! Greedy prefix scheduler with a shared deadline.
//!
//! # Algorithm
//!
//! 1. `deadline = ratio × Σ duration` over the whole sequence.
//! 2. Walk the sequence, accumulating elapsed time.
//! 3. While `elapsed ≤ deadline`, record the task as completed at `elapsed`.
//! 4. Stop at the first task that overruns; nothing after it is attempted.
//!
//! # Complexity
//! O(n) where n = number of tasks.

use tracing::trace;

use crate::models::{CompletionRecord, Task, TaskId};

/// Result of a single scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Budget the run was held to.
    pub deadline: f64,
    /// Completed tasks, in the order they were attempted.
    pub completions: Vec<CompletionRecord>,
    /// First task that would have overrun the budget, if any.
    pub cutoff: Option<TaskId>,
}

impl ScheduleOutcome {
    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.completions.len()
    }

    /// Completion time of the given task, if it was completed.
    pub fn completion_time(&self, task: TaskId) -> Option<u64> {
        self.completions
            .iter()
            .find(|c| c.task == task)
            .map(|c| c.done)
    }

    /// Whether the given task was completed.
    pub fn is_completed(&self, task: TaskId) -> bool {
        self.completion_time(task).is_some()
    }

    /// Elapsed time when the last completed task finished.
    pub fn elapsed(&self) -> u64 {
        self.completions.last().map_or(0, |c| c.done)
    }
}

/// Greedy sequential scheduler against a shared deadline.
///
/// # Example
///
/// ```
/// use u_dispatch_sim::models::{Task, TaskId};
/// use u_dispatch_sim::scheduler::DeadlineScheduler;
///
/// let tasks: Vec<Task> = [1, 2, 3, 4]
///     .iter()
///     .enumerate()
///     .map(|(i, &d)| Task::new(TaskId(i as u32), 10, d, 20).unwrap())
///     .collect();
/// let ordered: Vec<&Task> = tasks.iter().collect();
///
/// // Budget = 0.5 × 10 = 5: elapsed 1, 3 fit; 6 overruns.
/// let outcome = DeadlineScheduler::new(0.5).schedule(&ordered);
/// assert_eq!(outcome.completed_count(), 2);
/// assert_eq!(outcome.cutoff, Some(TaskId(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadlineScheduler {
    deadline_ratio: f64,
}

impl DeadlineScheduler {
    /// Creates a scheduler whose budget is `deadline_ratio` times the total
    /// duration of each sequence it runs.
    pub fn new(deadline_ratio: f64) -> Self {
        Self { deadline_ratio }
    }

    /// The configured deadline ratio.
    pub fn deadline_ratio(&self) -> f64 {
        self.deadline_ratio
    }

    /// Runs the ordered tasks against the deadline budget.
    ///
    /// `ordered` must contain every task of the batch (it is a permutation),
    /// because the budget is derived from its total duration.
    pub fn schedule(&self, ordered: &[&Task]) -> ScheduleOutcome {
        let total = ordered
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.duration()));
        let deadline = self.deadline_ratio * total as f64;

        let mut completions = Vec::with_capacity(ordered.len());
        let mut cutoff = None;
        let mut elapsed: u64 = 0;

        for task in ordered {
            elapsed = elapsed.saturating_add(task.duration());
            if elapsed as f64 <= deadline {
                completions.push(CompletionRecord::new(task.id(), elapsed));
            } else {
                cutoff = Some(task.id());
                break;
            }
        }

        trace!(
            deadline,
            completed = completions.len(),
            total = ordered.len(),
            cutoff = ?cutoff,
            "schedule run finished"
        );

        ScheduleOutcome {
            deadline,
            completions,
            cutoff,
        }
    }
}
