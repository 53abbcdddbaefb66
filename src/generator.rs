//! Synthetic task generation.
//!
//! Produces randomized task batches for Monte Carlo trials:
//!
//! - **weight**: uniform integer in `[weight_min, weight_max]` (default 1..=99)
//! - **due**: exponential with mean `due_mean` (default 5), rounded half to
//!   even, plus one so that `due >= 1`
//! - **duration**: uniform integer in `[0, due)`
//!
//! Due dates are right-skewed: most tasks are due soon, a few much later.
//! By default each batch draws its due dates from a freshly sampled pool of
//! 10,000 exponential values (sampling with replacement); setting
//! `due_pool_size` to `None` draws directly from the distribution instead,
//! which is statistically equivalent.

use rand::seq::IndexedRandom;
use rand::Rng;
use rand_distr::Exp;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SimulationError};
use crate::models::{Task, TaskBatch, TaskId};
use crate::validation::{validate_generator, ValidationError, ValidationErrorKind};

/// Default size of the per-batch due-date pool.
pub const DEFAULT_DUE_POOL_SIZE: usize = 10_000;

/// Parameters of the task distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest generated weight (inclusive).
    pub weight_min: u32,
    /// Largest generated weight (inclusive).
    pub weight_max: u32,
    /// Mean of the exponential due-date distribution (before the +1 shift).
    pub due_mean: f64,
    /// Number of exponential draws pooled per batch. `None` = direct draws.
    pub due_pool_size: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            weight_min: 1,
            weight_max: 99,
            due_mean: 5.0,
            due_pool_size: Some(DEFAULT_DUE_POOL_SIZE),
        }
    }
}

impl GeneratorConfig {
    /// Sets the inclusive weight range.
    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.weight_min = min;
        self.weight_max = max;
        self
    }

    /// Sets the due-date mean.
    pub fn with_due_mean(mut self, mean: f64) -> Self {
        self.due_mean = mean;
        self
    }

    /// Sets the due-date pool size (`None` = direct draws).
    pub fn with_due_pool_size(mut self, size: Option<usize>) -> Self {
        self.due_pool_size = size;
        self
    }
}

/// Generates task batches from a [`GeneratorConfig`].
///
/// The generator holds no RNG; callers pass one in so each trial can own an
/// independent stream.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_dispatch_sim::generator::{GeneratorConfig, TaskGenerator};
///
/// let generator = TaskGenerator::new(GeneratorConfig::default()).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
/// let batch = generator.generate(25, &mut rng).unwrap();
/// assert_eq!(batch.len(), 25);
/// assert!(batch.iter().all(|t| t.duration() < t.due()));
/// ```
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    config: GeneratorConfig,
    due_distribution: Exp<f64>,
}

impl TaskGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] if the weight range is empty or
    /// starts at zero, the due mean is not positive and finite, or the pool
    /// size is zero.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        validate_generator(&config).map_err(SimulationError::InvalidConfig)?;
        let due_distribution = Exp::new(1.0 / config.due_mean).map_err(|e| {
            SimulationError::InvalidConfig(vec![ValidationError::new(
                ValidationErrorKind::InvalidDueMean,
                format!("due mean {}: {e}", config.due_mean),
            )])
        })?;
        Ok(Self {
            config,
            due_distribution,
        })
    }

    /// Generator parameters.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a batch of `n` tasks in generation order.
    ///
    /// `n = 0` yields an empty batch.
    ///
    /// # Errors
    /// [`SimulationError::ConstraintViolation`] if a generated task breaks
    /// `duration < due`. This cannot happen for a valid configuration.
    pub fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Result<TaskBatch> {
        if n == 0 {
            return Ok(TaskBatch::new());
        }

        let pool = self
            .config
            .due_pool_size
            .map(|size| self.sample_due_pool(size, rng));

        let mut tasks = Vec::with_capacity(n);
        for i in 0..n {
            let id = TaskId(i as u32);
            let weight = rng.random_range(self.config.weight_min..=self.config.weight_max);
            let base = match &pool {
                Some(pool) => pool.choose(rng).copied().unwrap_or_default(),
                None => self.draw_due(rng),
            };
            let due = base.saturating_add(1);
            if due == 0 {
                return Err(SimulationError::ConstraintViolation {
                    task: id,
                    duration: 0,
                    due,
                });
            }
            let duration = rng.random_range(0..due);
            tasks.push(Task::new(id, weight, duration, due)?);
        }

        trace!(tasks = n, pooled = pool.is_some(), "generated task batch");
        TaskBatch::from_tasks(tasks)
    }

    fn sample_due_pool<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<u64> {
        (0..size).map(|_| self.draw_due(rng)).collect()
    }

    fn draw_due<R: Rng>(&self, rng: &mut R) -> u64 {
        let draw: f64 = rng.sample(self.due_distribution);
        draw.round_ties_even() as u64
    }
}
