//! Deadline-budget scheduler and trial scoring.
//!
//! # Algorithm
//!
//! `DeadlineScheduler` consumes an ordered task sequence against a shared
//! budget of `ratio × total duration`. It is greedy and strictly prefix
//! based: the first task that would overrun the budget ends the run, even if
//! later, shorter tasks would still fit. Orderings that front-load cheap or
//! important work are rewarded accordingly.
//!
//! # Metrics
//!
//! `Metrics` scores a single run: fraction of tasks completed, fraction of
//! important tasks completed, and fraction completed by their due date.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod deadline;
mod kpi;

pub use deadline::{DeadlineScheduler, ScheduleOutcome};
pub use kpi::{important_cut_index, important_tasks, Metrics};
