//! Structured error types for the simulation crate.
//!
//! Most degenerate inputs (empty batches, zero trials) are defined edge
//! behaviors that yield zero metrics. The variants here cover the rest:
//! broken task invariants, bad configuration and config file I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskId;
use crate::validation::ValidationError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A task would violate `duration < due`.
    ///
    /// Generated tasks satisfy this by construction, so seeing it from the
    /// generator indicates a logic error.
    #[error("task {task} violates duration < due (duration={duration}, due={due})")]
    ConstraintViolation { task: TaskId, duration: u64, due: u64 },

    /// Two tasks in one batch share an identifier.
    #[error("duplicate task id {0} in batch")]
    DuplicateTaskId(TaskId),

    /// A strategy name did not match any known ordering.
    #[error(
        "unknown ordering strategy: '{0}' (valid: as-they-come, due-first, due-last, \
         important-first, easier-first, easier-important-first, easier-due-first)"
    )]
    UnknownStrategy(String),

    /// Configuration failed validation. Carries every detected problem.
    #[error("invalid simulation config: {}", format_validation(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// The config file could not be read.
    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`SimulationConfig`].
    ///
    /// [`SimulationConfig`]: crate::simulation::SimulationConfig
    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
