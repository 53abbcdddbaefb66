//! Simulation results and their renderings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatching::Strategy;
use crate::scheduler::Metrics;

const METRIC_LABELS: [&str; 3] = [
    "- tasks completed",
    "- important tasks completed",
    "- tasks completed in time",
];

/// Averaged metrics of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Evaluated strategy.
    pub strategy: Strategy,
    /// Report label of the strategy.
    pub label: String,
    /// Averaged metrics.
    pub metrics: Metrics,
}

impl StrategyResult {
    /// Creates a result, labelling it from the strategy.
    pub fn new(strategy: Strategy, metrics: Metrics) -> Self {
        Self {
            strategy,
            label: strategy.label().to_string(),
            metrics,
        }
    }
}

/// Outcome of a full strategy sweep.
///
/// `Display` renders the console report; [`Self::to_json`] renders the same
/// data for external tooling such as chart generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Deadline ratio used for every trial.
    pub deadline_ratio: f64,
    /// Trials per strategy.
    pub trial_count: usize,
    /// Tasks per batch.
    pub batch_size: usize,
    /// Base seed; rerunning with it reproduces the report.
    pub seed: u64,
    /// Per-strategy results, in evaluation order.
    pub results: Vec<StrategyResult>,
}

impl SimulationReport {
    /// Metrics of the given strategy, if it was evaluated.
    pub fn metrics_for(&self, strategy: Strategy) -> Option<&Metrics> {
        self.results
            .iter()
            .find(|r| r.strategy == strategy)
            .map(|r| &r.metrics)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result.label)?;
            let (completed, important, in_time) = result.metrics.as_tuple();
            for (label, value) in METRIC_LABELS.iter().zip([completed, important, in_time]) {
                writeln!(f, "{:<40} :  {:3.2}%", label, value * 100.0)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
