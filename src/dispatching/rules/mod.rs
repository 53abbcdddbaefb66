//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Due-date**: EDD, LDD
//! - **Priority**: PRIORITY
//! - **Effort**: SPT, WSPT, DSPT
//!
//! # Score Convention
//! All rules return lower scores for higher priority tasks.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

// ======================== Due-date rules ========================

/// Earliest Due Date.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.due() as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Latest Due Date.
///
/// Attempts the least urgent tasks first. Mostly useful as a baseline
/// against EDD.
#[derive(Debug, Clone, Copy)]
pub struct Ldd;

impl DispatchingRule for Ldd {
    fn name(&self) -> &'static str {
        "LDD"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        -(task.due() as f64)
    }

    fn description(&self) -> &'static str {
        "Latest Due Date"
    }
}

// ======================== Priority ========================

/// Simple priority rule.
///
/// Prioritizes tasks with higher weight.
/// (Negated because lower score = higher priority in convention.)
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        -(task.weight() as f64)
    }

    fn description(&self) -> &'static str {
        "Task Priority"
    }
}

// ======================== Effort rules ========================

/// Shortest Processing Time.
///
/// Maximizes the number of tasks that fit in a fixed budget.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.duration() as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Weighted Shortest Processing Time.
///
/// Score = `duration / weight`: effort per unit of importance. Tasks with
/// zero weight carry no importance and go last.
///
/// # Reference
/// Smith (1956), optimal for minimizing weighted mean flow time.
#[derive(Debug, Clone, Copy)]
pub struct Wspt;

impl DispatchingRule for Wspt {
    fn name(&self) -> &'static str {
        "WSPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        if task.weight() == 0 {
            return f64::MAX;
        }
        task.duration() as f64 / task.weight() as f64
    }

    fn description(&self) -> &'static str {
        "Weighted Shortest Processing Time"
    }
}

/// Due-weighted Shortest Processing Time.
///
/// Score = `duration / due`: effort per unit of available time. Always in
/// `[0, 1)` because `duration < due`.
#[derive(Debug, Clone, Copy)]
pub struct Dspt;

impl DispatchingRule for Dspt {
    fn name(&self) -> &'static str {
        "DSPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.duration() as f64 / task.due() as f64
    }

    fn description(&self) -> &'static str {
        "Due-weighted Shortest Processing Time"
    }
}
