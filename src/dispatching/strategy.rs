//! Named ordering strategies.
//!
//! Each strategy is a [`RuleEngine`] with a stable name (used in
//! config files and on the command line) and a human-readable label (used
//! in reports).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine};
use crate::error::SimulationError;
use crate::models::{Task, TaskBatch};

/// The task-ordering heuristics under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Batch order, unchanged.
    AsTheyCome,
    /// Ascending due date.
    DueFirst,
    /// Descending due date.
    DueLast,
    /// Descending weight.
    ImportantFirst,
    /// Ascending duration.
    EasierFirst,
    /// Ascending `duration / weight`.
    EasierImportantFirst,
    /// Ascending `duration / due`.
    EasierDueFirst,
}

impl Strategy {
    /// All strategies, in reporting order.
    pub const ALL: [Strategy; 7] = [
        Strategy::AsTheyCome,
        Strategy::DueFirst,
        Strategy::DueLast,
        Strategy::ImportantFirst,
        Strategy::EasierFirst,
        Strategy::EasierImportantFirst,
        Strategy::EasierDueFirst,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::AsTheyCome => "as-they-come",
            Strategy::DueFirst => "due-first",
            Strategy::DueLast => "due-last",
            Strategy::ImportantFirst => "important-first",
            Strategy::EasierFirst => "easier-first",
            Strategy::EasierImportantFirst => "easier-important-first",
            Strategy::EasierDueFirst => "easier-due-first",
        }
    }

    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::AsTheyCome => "Do as they come",
            Strategy::DueFirst => "Due tasks first",
            Strategy::DueLast => "Due tasks last",
            Strategy::ImportantFirst => "Important tasks first",
            Strategy::EasierFirst => "Easier tasks first",
            Strategy::EasierImportantFirst => "Easier important tasks first",
            Strategy::EasierDueFirst => "Easier due tasks first",
        }
    }

    /// Rule engine implementing this strategy.
    pub fn engine(self) -> RuleEngine {
        let engine = RuleEngine::new();
        match self {
            Strategy::AsTheyCome => engine,
            Strategy::DueFirst => engine.with_rule(rules::Edd),
            Strategy::DueLast => engine.with_rule(rules::Ldd),
            Strategy::ImportantFirst => engine.with_rule(rules::Priority),
            Strategy::EasierFirst => engine.with_rule(rules::Spt),
            Strategy::EasierImportantFirst => engine.with_rule(rules::Wspt),
            Strategy::EasierDueFirst => engine.with_rule(rules::Dspt),
        }
    }

    /// Orders a batch. The batch itself is left untouched.
    pub fn order(self, batch: &TaskBatch) -> Vec<&Task> {
        self.engine().order(batch.tasks())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimulationError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    /// (weight, duration, due) per task, ids in generation order.
    fn make_batch(specs: &[(u32, u64, u64)]) -> TaskBatch {
        let tasks = specs
            .iter()
            .enumerate()
            .map(|(i, &(w, d, due))| Task::new(TaskId(i as u32), w, d, due).unwrap())
            .collect();
        TaskBatch::from_tasks(tasks).unwrap()
    }

    fn order_ids(strategy: Strategy, batch: &TaskBatch) -> Vec<u32> {
        strategy.order(batch).iter().map(|t| t.id().0).collect()
    }

    fn sample_batch() -> TaskBatch {
        make_batch(&[
            (50, 4, 6),  // 0: w/d=0.08, d/due=0.67
            (10, 1, 12), // 1: 0.1, 0.083
            (90, 3, 4),  // 2: 0.033, 0.75
            (30, 0, 2),  // 3: 0, 0
            (70, 6, 10), // 4: 0.086, 0.6
        ])
    }

    #[test]
    fn test_as_they_come() {
        assert_eq!(order_ids(Strategy::AsTheyCome, &sample_batch()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_as_they_come_ignores_ids() {
        let tasks = vec![
            Task::new(TaskId(3), 10, 1, 5).unwrap(),
            Task::new(TaskId(1), 10, 1, 5).unwrap(),
            Task::new(TaskId(7), 10, 1, 5).unwrap(),
        ];
        let batch = TaskBatch::from_tasks(tasks).unwrap();
        assert_eq!(order_ids(Strategy::AsTheyCome, &batch), vec![3, 1, 7]);
    }

    #[test]
    fn test_due_first() {
        assert_eq!(order_ids(Strategy::DueFirst, &sample_batch()), vec![3, 2, 0, 4, 1]);
    }

    #[test]
    fn test_due_last() {
        assert_eq!(order_ids(Strategy::DueLast, &sample_batch()), vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn test_important_first() {
        assert_eq!(
            order_ids(Strategy::ImportantFirst, &sample_batch()),
            vec![2, 4, 0, 3, 1]
        );
    }

    #[test]
    fn test_easier_first() {
        assert_eq!(order_ids(Strategy::EasierFirst, &sample_batch()), vec![3, 1, 2, 0, 4]);
    }

    #[test]
    fn test_easier_important_first() {
        assert_eq!(
            order_ids(Strategy::EasierImportantFirst, &sample_batch()),
            vec![3, 2, 0, 4, 1]
        );
    }

    #[test]
    fn test_easier_due_first() {
        assert_eq!(
            order_ids(Strategy::EasierDueFirst, &sample_batch()),
            vec![3, 1, 4, 0, 2]
        );
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let batch = make_batch(&[(5, 1, 3), (5, 1, 3), (5, 1, 3)]);
        for strategy in Strategy::ALL {
            assert_eq!(order_ids(strategy, &batch), vec![0, 1, 2], "{strategy}");
        }
    }

    #[test]
    fn test_order_does_not_mutate_batch() {
        let batch = sample_batch();
        let before = batch.clone();
        for strategy in Strategy::ALL {
            let _ = strategy.order(&batch);
        }
        assert_eq!(batch, before);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!(" Due-First ".parse::<Strategy>().unwrap(), Strategy::DueFirst);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "random".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SimulationError::UnknownStrategy(ref s) if s == "random"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::AsTheyCome.label(), "Do as they come");
        assert_eq!(
            Strategy::EasierImportantFirst.label(),
            "Easier important tasks first"
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Strategy::EasierDueFirst).unwrap();
        assert_eq!(json, "\"easier-due-first\"");
        let parsed: Strategy = serde_json::from_str("\"due-last\"").unwrap();
        assert_eq!(parsed, Strategy::DueLast);
    }
}
