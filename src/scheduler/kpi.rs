//! Trial quality metrics.
//!
//! Scores a single scheduling run against the full task sequence it was
//! given, in dispatch order.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completed | completed / all tasks |
//! | Important | completed important / important tasks |
//! | In time | completed with `done ≤ due` / all tasks |
//!
//! "Important" tasks are the top quarter of the sequence by weight: the
//! dispatch-ordered sequence is stably sorted by ascending weight and
//! everything from index `round(0.75 × N)` onward is important. Equal
//! weights therefore keep their dispatch order, and the strategy decides
//! which side of the cut a tie lands on. Rounding is half-to-even, so for
//! N = 6 the cut is at 4 (two important tasks), not 5.
//!
//! The in-time denominator is the whole batch, not the completed count, so
//! unfinished work counts against the schedule.

use std::collections::{HashMap, HashSet};
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::models::{CompletionRecord, Task, TaskId};

/// Per-run (or averaged) performance metrics, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of all tasks that were completed.
    pub completed: f64,
    /// Fraction of important tasks that were completed.
    pub important: f64,
    /// Fraction of all tasks completed no later than their due date.
    pub in_time: f64,
}

impl Metrics {
    /// All-zero metrics; the accumulator's starting point.
    pub const ZERO: Metrics = Metrics {
        completed: 0.0,
        important: 0.0,
        in_time: 0.0,
    };

    /// Creates metrics from raw fractions.
    pub fn new(completed: f64, important: f64, in_time: f64) -> Self {
        Self {
            completed,
            important,
            in_time,
        }
    }

    /// Scores one run.
    ///
    /// # Arguments
    /// * `completions` - Completion records produced by the scheduler.
    /// * `ordered` - Every task of the batch, in the order it was dispatched.
    ///
    /// An empty batch scores `(0, 0, 0)`.
    pub fn calculate(completions: &[CompletionRecord], ordered: &[&Task]) -> Self {
        if ordered.is_empty() {
            return Self::ZERO;
        }
        let total = ordered.len() as f64;

        let completed_ids: HashSet<TaskId> = completions.iter().map(|c| c.task).collect();
        let completed = completions.len() as f64 / total;

        let important_set = important_tasks(ordered);
        let important = if important_set.is_empty() {
            0.0
        } else {
            let overlap = important_set
                .iter()
                .filter(|t| completed_ids.contains(&t.id()))
                .count();
            overlap as f64 / important_set.len() as f64
        };

        let by_id: HashMap<TaskId, &Task> = ordered.iter().map(|t| (t.id(), *t)).collect();
        let in_time_count = completions
            .iter()
            .filter(|c| by_id.get(&c.task).is_some_and(|t| t.is_in_time(c.done)))
            .count();
        let in_time = in_time_count as f64 / total;

        Self {
            completed,
            important,
            in_time,
        }
    }

    /// Divides every component by `n`. `n = 0` yields zero metrics.
    pub fn averaged(self, n: usize) -> Self {
        if n == 0 {
            return Self::ZERO;
        }
        let n = n as f64;
        Self {
            completed: self.completed / n,
            important: self.important / n,
            in_time: self.in_time / n,
        }
    }

    /// Components as `(completed, important, in_time)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.completed, self.important, self.in_time)
    }
}

impl Add for Metrics {
    type Output = Metrics;

    fn add(self, rhs: Metrics) -> Metrics {
        Metrics {
            completed: self.completed + rhs.completed,
            important: self.important + rhs.important,
            in_time: self.in_time + rhs.in_time,
        }
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Metrics) {
        *self = *self + rhs;
    }
}

/// Index at which the important slice starts in a weight-sorted batch of `n`.
///
/// `round(0.75 × n)` with ties rounded to even.
pub fn important_cut_index(n: usize) -> usize {
    (0.75 * n as f64).round_ties_even() as usize
}

/// The important tasks of a dispatched sequence: the top quarter by weight.
///
/// Tasks with equal weight keep their dispatch order in the sort, so the
/// cut decides deterministically which side a tie lands on.
pub fn important_tasks<'a>(ordered: &[&'a Task]) -> Vec<&'a Task> {
    let mut sorted: Vec<&'a Task> = ordered.to_vec();
    sorted.sort_by_key(|t| t.weight());
    let cut = important_cut_index(sorted.len()).min(sorted.len());
    sorted.split_off(cut)
}
