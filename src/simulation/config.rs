//! Simulation run configuration.
//!
//! Every field has a default, so a YAML file only needs the keys it wants to
//! change:
//! ```yaml
//! deadline_ratio: 0.5
//! trial_count: 20000
//! batch_size: 25
//! seed: 42
//! parallel: true
//! strategies: [as-they-come, due-first, easier-first]
//! generator:
//!   weight_min: 1
//!   weight_max: 99
//!   due_mean: 5.0
//!   due_pool_size: 10000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dispatching::Strategy;
use crate::error::{Result, SimulationError};
use crate::generator::GeneratorConfig;
use crate::validation::validate_config;

/// Parameters of a full strategy sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Budget as a fraction of each batch's total duration.
    pub deadline_ratio: f64,
    /// Independent trials per strategy.
    pub trial_count: usize,
    /// Tasks per trial batch.
    pub batch_size: usize,
    /// Strategies to evaluate, in reporting order.
    pub strategies: Vec<Strategy>,
    /// Base seed. `None` = fresh entropy on every run.
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool.
    pub parallel: bool,
    /// Task distribution.
    pub generator: GeneratorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            deadline_ratio: 0.5,
            trial_count: 20_000,
            batch_size: 25,
            strategies: Strategy::ALL.to_vec(),
            seed: None,
            parallel: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads a configuration from a YAML file. Missing keys take defaults.
    ///
    /// # Errors
    /// [`SimulationError::ConfigRead`] if the file cannot be read,
    /// [`SimulationError::ConfigParse`] if it is not valid YAML for this
    /// structure. The result is not validated; see [`Self::validate`].
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading simulation config from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| SimulationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| SimulationError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(?config, "parsed simulation config");
        Ok(config)
    }

    /// Checks the configuration, reporting every problem at once.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] listing all detected issues.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(SimulationError::InvalidConfig)
    }

    /// Sets the deadline ratio.
    pub fn with_deadline_ratio(mut self, ratio: f64) -> Self {
        self.deadline_ratio = ratio;
        self
    }

    /// Sets the number of trials per strategy.
    pub fn with_trial_count(mut self, trials: usize) -> Self {
        self.trial_count = trials;
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets the strategies to evaluate.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel trials.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the task distribution.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }
}
