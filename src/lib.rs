//! Monte Carlo evaluation of task-ordering dispatching rules.
//!
//! Estimates how well simple ordering heuristics cope with a shared deadline
//! budget. Each trial generates a random batch of tasks, orders it with a
//! heuristic, runs a greedy prefix scheduler against a budget of
//! `ratio × total duration`, and scores the outcome on three metrics:
//! tasks completed, important tasks completed, and tasks completed in time.
//! Averaging many trials gives stable per-heuristic estimates.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskId`, `TaskBatch`, `CompletionRecord`
//! - **`generator`**: Randomized task batches (exponential due dates)
//! - **`dispatching`**: Dispatching rules, `RuleEngine`, named `Strategy` set
//! - **`scheduler`**: `DeadlineScheduler` and per-trial `Metrics`
//! - **`simulation`**: Trial aggregation, configuration, reports
//! - **`validation`**: Configuration checks
//!
//! The heuristics are measured, not optimized: nothing here tries to find
//! the best schedule for a batch.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Jackson (1955), "Scheduling a production line to minimize maximum tardiness"

pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::{Result, SimulationError};
