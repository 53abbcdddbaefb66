//! Rule engine: turns a dispatching rule into a batch ordering.
//!
//! An engine without a rule is the identity ordering. Tasks with equal
//! scores keep their input order.

use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// Sorts tasks by a dispatching rule.
///
/// Scores are computed once per task and compared with [`f64::total_cmp`],
/// so the sort is a total order and ties are exact.
///
/// # Example
/// ```
/// use u_dispatch_sim::dispatching::{rules, RuleEngine};
/// use u_dispatch_sim::models::{Task, TaskId};
///
/// let tasks = vec![
///     Task::new(TaskId(0), 10, 4, 9).unwrap(),
///     Task::new(TaskId(1), 10, 1, 9).unwrap(),
/// ];
/// let engine = RuleEngine::new().with_rule(rules::Spt);
///
/// let ordered = engine.order(&tasks);
/// assert_eq!(ordered[0].id(), TaskId(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rule: Option<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an engine with no rule. Input order is kept.
    pub fn new() -> Self {
        Self { rule: None }
    }

    /// Sets the rule, replacing any previous one.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// Name of the configured rule, if any.
    pub fn rule_name(&self) -> Option<&'static str> {
        self.rule.as_ref().map(|r| r.name())
    }

    /// Sorts tasks by priority (highest priority first).
    ///
    /// Returns indices into the original task slice. The sort is stable.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        let Some(rule) = &self.rule else {
            return indices;
        };

        let scores: Vec<RuleScore> = tasks.iter().map(|t| rule.evaluate(t)).collect();
        indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
        indices
    }

    /// Returns the tasks in dispatch order without modifying them.
    pub fn order<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        self.sort_indices(tasks)
            .into_iter()
            .map(|i| &tasks[i])
            .collect()
    }

    /// Score of a single task, or `None` without a rule.
    pub fn evaluate(&self, task: &Task) -> Option<RuleScore> {
        self.rule.as_ref().map(|rule| rule.evaluate(task))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rule", &self.rule_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::TaskId;

    fn make_task(id: u32, weight: u32, duration: u64, due: u64) -> Task {
        Task::new(TaskId(id), weight, duration, due).unwrap()
    }

    fn ids(ordered: &[&Task]) -> Vec<u32> {
        ordered.iter().map(|t| t.id().0).collect()
    }

    #[test]
    fn test_spt_ordering() {
        let tasks = vec![
            make_task(0, 1, 5, 10),
            make_task(1, 1, 1, 10),
            make_task(2, 1, 3, 10),
        ];
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(ids(&engine.order(&tasks)), vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_ties() {
        let tasks = vec![
            make_task(0, 1, 2, 10),
            make_task(1, 1, 1, 10),
            make_task(2, 1, 2, 10),
            make_task(3, 1, 1, 10),
        ];
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(ids(&engine.order(&tasks)), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_descending_rule_keeps_tie_order() {
        let tasks = vec![
            make_task(0, 1, 1, 5),
            make_task(1, 1, 1, 9),
            make_task(2, 1, 1, 5),
        ];
        let engine = RuleEngine::new().with_rule(rules::Ldd);
        assert_eq!(ids(&engine.order(&tasks)), vec![1, 0, 2]);
    }

    #[test]
    fn test_no_rule_keeps_input_order() {
        let tasks = vec![make_task(3, 1, 4, 10), make_task(1, 1, 2, 10)];
        let engine = RuleEngine::new();
        assert_eq!(ids(&engine.order(&tasks)), vec![3, 1]);
        assert!(engine.evaluate(&tasks[0]).is_none());
    }

    #[test]
    fn test_with_rule_replaces() {
        let tasks = vec![make_task(0, 1, 1, 9), make_task(1, 1, 4, 5)];
        let engine = RuleEngine::new().with_rule(rules::Spt).with_rule(rules::Edd);
        assert_eq!(engine.rule_name(), Some("EDD"));
        assert_eq!(ids(&engine.order(&tasks)), vec![1, 0]);
    }

    #[test]
    fn test_empty_tasks() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.order(&[]).is_empty());
    }

    #[test]
    fn test_order_is_permutation() {
        let tasks: Vec<Task> = (0..20)
            .map(|i| make_task(i, 1 + i % 7, (i % 5) as u64, 6))
            .collect();
        let engine = RuleEngine::new().with_rule(rules::Wspt);
        let mut seen = ids(&engine.order(&tasks));
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_evaluate_score() {
        let task = make_task(0, 4, 3, 20);
        let engine = RuleEngine::new().with_rule(rules::Edd);
        assert_eq!(engine.evaluate(&task), Some(20.0));
    }

    #[test]
    fn test_debug_names_rule() {
        let engine = RuleEngine::new().with_rule(rules::Edd);
        assert!(format!("{engine:?}").contains("EDD"));
        assert!(format!("{:?}", RuleEngine::new()).contains("None"));
    }
}
