//! Monte Carlo trial runner.
//!
//! # Algorithm
//!
//! For each strategy, run `trial_count` independent trials:
//! 1. Generate a fresh batch.
//! 2. Order it with the strategy.
//! 3. Schedule it against the deadline budget.
//! 4. Score the outcome.
//!
//! Per-trial metrics are summed pointwise in trial order and divided by the
//! trial count.
//!
//! # Randomness
//!
//! Trial `i` draws from a `ChaCha8Rng` seeded with the run's base seed on
//! stream `i`. Trials therefore share no RNG state, can run in any order or
//! in parallel, and reproduce exactly for a fixed seed. All strategies use
//! the same base seed, so they are compared on identical batches.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use super::{SimulationConfig, SimulationReport, StrategyResult};
use crate::dispatching::Strategy;
use crate::error::Result;
use crate::generator::{GeneratorConfig, TaskGenerator};
use crate::models::TaskBatch;
use crate::scheduler::{DeadlineScheduler, Metrics};

/// Runs trials and aggregates their metrics.
///
/// # Example
/// ```
/// use u_dispatch_sim::dispatching::Strategy;
/// use u_dispatch_sim::generator::GeneratorConfig;
/// use u_dispatch_sim::simulation::Simulation;
///
/// let simulation = Simulation::new(GeneratorConfig::default()).unwrap();
/// let metrics = simulation
///     .run_strategy(0.5, 200, 25, Strategy::EasierFirst, 42)
///     .unwrap();
/// assert!((0.0..=1.0).contains(&metrics.completed));
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    generator: TaskGenerator,
    parallel: bool,
}

impl Simulation {
    /// Creates a runner with parallel trials enabled.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`](crate::error::SimulationError::InvalidConfig)
    /// if the generator parameters are invalid.
    pub fn new(generator: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            generator: TaskGenerator::new(generator)?,
            parallel: true,
        })
    }

    /// Creates a runner matching a full configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Self::new(config.generator.clone())?.with_parallel(config.parallel))
    }

    /// Enables or disables parallel trials. Results are identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs one trial: generate, order, schedule, score.
    pub fn run_trial<R: Rng>(
        &self,
        deadline_ratio: f64,
        batch_size: usize,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Metrics> {
        let batch = self.generator.generate(batch_size, rng)?;
        Ok(Self::score_batch(&batch, deadline_ratio, strategy))
    }

    /// Orders, schedules and scores an existing batch.
    ///
    /// The scorer sees the batch in dispatch order, so weight ties at the
    /// important cut are broken by the strategy's ordering.
    pub fn score_batch(batch: &TaskBatch, deadline_ratio: f64, strategy: Strategy) -> Metrics {
        let ordered = strategy.order(batch);
        let outcome = DeadlineScheduler::new(deadline_ratio).schedule(&ordered);
        Metrics::calculate(&outcome.completions, &ordered)
    }

    /// Averages `trial_count` independent trials of one strategy.
    ///
    /// `trial_count = 0` yields zero metrics.
    pub fn run_strategy(
        &self,
        deadline_ratio: f64,
        trial_count: usize,
        batch_size: usize,
        strategy: Strategy,
        seed: u64,
    ) -> Result<Metrics> {
        let trial = |i: usize| {
            let mut rng = trial_rng(seed, i);
            self.run_trial(deadline_ratio, batch_size, strategy, &mut rng)
        };

        let per_trial: Vec<Metrics> = if self.parallel {
            (0..trial_count)
                .into_par_iter()
                .map(trial)
                .collect::<Result<_>>()?
        } else {
            (0..trial_count).map(trial).collect::<Result<_>>()?
        };

        let total = per_trial
            .into_iter()
            .fold(Metrics::ZERO, |acc, metrics| acc + metrics);
        Ok(total.averaged(trial_count))
    }

    /// Evaluates every configured strategy.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`](crate::error::SimulationError::InvalidConfig)
    /// if `config` fails validation.
    pub fn run(&self, config: &SimulationConfig) -> Result<SimulationReport> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(
            seed,
            deadline_ratio = config.deadline_ratio,
            trial_count = config.trial_count,
            batch_size = config.batch_size,
            parallel = self.parallel,
            "starting simulation"
        );

        let mut results = Vec::with_capacity(config.strategies.len());
        for &strategy in &config.strategies {
            info!(strategy = %strategy, trials = config.trial_count, "evaluating strategy");
            let metrics = self.run_strategy(
                config.deadline_ratio,
                config.trial_count,
                config.batch_size,
                strategy,
                seed,
            )?;
            info!(
                strategy = %strategy,
                completed = metrics.completed,
                important = metrics.important,
                in_time = metrics.in_time,
                "strategy evaluated"
            );
            results.push(StrategyResult::new(strategy, metrics));
        }

        Ok(SimulationReport {
            deadline_ratio: config.deadline_ratio,
            trial_count: config.trial_count,
            batch_size: config.batch_size,
            seed,
            results,
        })
    }
}

/// Independent RNG for one trial.
fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    fn simulation() -> Simulation {
        Simulation::new(GeneratorConfig::default()).unwrap()
    }

    fn in_unit_range(m: &Metrics) -> bool {
        [m.completed, m.important, m.in_time]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_run_strategy_bounds() {
        let sim = simulation();
        for strategy in Strategy::ALL {
            let metrics = sim.run_strategy(0.5, 100, 25, strategy, 1).unwrap();
            assert!(in_unit_range(&metrics), "{strategy}: {metrics:?}");
        }
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let sim = simulation();
        let a = sim.run_strategy(0.5, 200, 25, Strategy::DueFirst, 7).unwrap();
        let b = sim.run_strategy(0.5, 200, 25, Strategy::DueFirst, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = simulation();
        let sequential = simulation().with_parallel(false);
        let a = parallel
            .run_strategy(0.5, 300, 25, Strategy::EasierImportantFirst, 11)
            .unwrap();
        let b = sequential
            .run_strategy(0.5, 300, 25, Strategy::EasierImportantFirst, 11)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_trials() {
        let metrics = simulation()
            .run_strategy(0.5, 0, 25, Strategy::AsTheyCome, 1)
            .unwrap();
        assert_eq!(metrics, Metrics::ZERO);
    }

    #[test]
    fn test_zero_batch_size() {
        let metrics = simulation()
            .run_strategy(0.5, 50, 0, Strategy::AsTheyCome, 1)
            .unwrap();
        assert_eq!(metrics, Metrics::ZERO);
    }

    #[test]
    fn test_full_ratio_completes_everything() {
        let metrics = simulation()
            .run_strategy(1.0, 100, 25, Strategy::DueLast, 3)
            .unwrap();
        assert!((metrics.completed - 1.0).abs() < 1e-12);
        assert!((metrics.important - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_easier_first_completes_most() {
        // SPT maximizes the number of tasks in a prefix budget.
        let sim = simulation();
        let spt = sim.run_strategy(0.5, 500, 25, Strategy::EasierFirst, 5).unwrap();
        for strategy in Strategy::ALL {
            let other = sim.run_strategy(0.5, 500, 25, strategy, 5).unwrap();
            assert!(spt.completed >= other.completed - 1e-12, "{strategy}");
        }
    }

    #[test]
    fn test_important_first_wins_importance() {
        let sim = simulation();
        let priority = sim
            .run_strategy(0.5, 500, 25, Strategy::ImportantFirst, 9)
            .unwrap();
        let fifo = sim.run_strategy(0.5, 500, 25, Strategy::AsTheyCome, 9).unwrap();
        assert!(priority.important > fifo.important);
    }

    #[test]
    fn test_weight_ties_scored_in_dispatch_order() {
        use crate::models::{Task, TaskId};

        // Tasks 0 and 1 tie on weight at the important cut. Due-first runs
        // 1, 2, 3, 0 and the budget (4 of 8) stops before task 0.
        let tasks = vec![
            Task::new(TaskId(0), 50, 5, 9).unwrap(),
            Task::new(TaskId(1), 50, 1, 2).unwrap(),
            Task::new(TaskId(2), 10, 1, 5).unwrap(),
            Task::new(TaskId(3), 20, 1, 6).unwrap(),
        ];
        let batch = TaskBatch::from_tasks(tasks).unwrap();

        // In dispatch order task 0 sorts last among the ties, so it is the
        // important one, and it was not completed.
        let metrics = Simulation::score_batch(&batch, 0.5, Strategy::DueFirst);
        assert!((metrics.completed - 0.75).abs() < 1e-12);
        assert_eq!(metrics.important, 0.0);

        // The same completions scored in batch order would count task 1.
        let ordered = Strategy::DueFirst.order(&batch);
        let outcome = DeadlineScheduler::new(0.5).schedule(&ordered);
        let in_batch_order: Vec<&Task> = batch.iter().collect();
        let skewed = Metrics::calculate(&outcome.completions, &in_batch_order);
        assert!((skewed.important - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_run_report() {
        let config = SimulationConfig::default()
            .with_trial_count(50)
            .with_seed(42)
            .with_strategies(vec![Strategy::DueFirst, Strategy::AsTheyCome]);
        let report = Simulation::from_config(&config).unwrap().run(&config).unwrap();
        assert_eq!(report.seed, 42);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].strategy, Strategy::DueFirst);
        assert_eq!(report.results[1].strategy, Strategy::AsTheyCome);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = SimulationConfig::default().with_trial_count(0);
        let err = simulation().run(&config).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_unseeded_run_records_seed() {
        let config = SimulationConfig::default()
            .with_trial_count(5)
            .with_strategies(vec![Strategy::EasierFirst]);
        let first = simulation().run(&config).unwrap();
        let replay = simulation().run(&config.clone().with_seed(first.seed)).unwrap();
        assert_eq!(first.results, replay.results);
    }
}
