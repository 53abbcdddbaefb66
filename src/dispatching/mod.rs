//! Dispatching rules and strategies for ordering task batches.
//!
//! A dispatching rule scores a task; sorting a batch by ascending score
//! yields the order in which the scheduler will attempt the tasks. Rules are
//! pure: they never mutate a task and ties keep the batch's input order.
//!
//! # Usage
//!
//! ```
//! use u_dispatch_sim::dispatching::{rules, RuleEngine, Strategy};
//!
//! // A single named strategy...
//! let strategy: Strategy = "easier-first".parse().unwrap();
//! assert_eq!(strategy, Strategy::EasierFirst);
//!
//! // ...or an engine around any rule.
//! let engine = RuleEngine::new().with_rule(rules::Edd);
//! assert_eq!(engine.rule_name(), Some("EDD"));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;
mod strategy;

pub use engine::RuleEngine;
pub use strategy::Strategy;

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (attempted first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates task priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for tasks that should be attempted first, and must never return NaN.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a task.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
