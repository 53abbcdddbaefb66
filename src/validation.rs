//! Input validation for simulation runs.
//!
//! Checks a [`SimulationConfig`] before any trial runs. Detects:
//! - Negative or non-finite deadline ratios
//! - Zero trial counts
//! - Empty or duplicated strategy lists
//! - Degenerate task distributions (empty weight range, bad due mean,
//!   empty due pool)
//!
//! All problems are collected so a caller sees every issue at once.
//!
//! [`SimulationConfig`]: crate::simulation::SimulationConfig

use std::collections::HashSet;
use std::fmt;

use crate::generator::GeneratorConfig;
use crate::simulation::SimulationConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Deadline ratio is negative, NaN or infinite.
    InvalidDeadlineRatio,
    /// Trial count is zero.
    ZeroTrials,
    /// No strategies to evaluate.
    NoStrategies,
    /// The same strategy is listed twice.
    DuplicateStrategy,
    /// Weight range is empty or includes zero.
    InvalidWeightRange,
    /// Due-date mean is not a positive finite number.
    InvalidDueMean,
    /// Due-date pool has zero entries.
    EmptyDuePool,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a full simulation configuration.
///
/// Checks:
/// 1. Deadline ratio is finite and non-negative
/// 2. Trial count is positive
/// 3. At least one strategy, none repeated
/// 4. Generator parameters (see [`validate_generator`])
///
/// A batch size of zero is allowed: it yields empty batches and zero metrics.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !config.deadline_ratio.is_finite() || config.deadline_ratio < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDeadlineRatio,
            format!(
                "deadline ratio must be finite and >= 0, got {}",
                config.deadline_ratio
            ),
        ));
    }

    if config.trial_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTrials,
            "trial count must be positive",
        ));
    }

    if config.strategies.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoStrategies,
            "no strategies configured",
        ));
    }

    let mut seen = HashSet::new();
    for strategy in &config.strategies {
        if !seen.insert(*strategy) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStrategy,
                format!("strategy '{strategy}' listed more than once"),
            ));
        }
    }

    if let Err(generator_errors) = validate_generator(&config.generator) {
        errors.extend(generator_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates task distribution parameters.
pub fn validate_generator(config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.weight_min == 0 || config.weight_min > config.weight_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeightRange,
            format!(
                "weight range [{}, {}] must be non-empty and start at 1 or more",
                config.weight_min, config.weight_max
            ),
        ));
    }

    if !config.due_mean.is_finite() || config.due_mean <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDueMean,
            format!("due mean must be finite and > 0, got {}", config.due_mean),
        ));
    }

    if config.due_pool_size == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDuePool,
            "due pool size must be positive (or omitted for direct draws)",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::Strategy;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_ratio_valid() {
        let config = SimulationConfig::default().with_deadline_ratio(0.0);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_batch_size_valid() {
        let config = SimulationConfig::default().with_batch_size(0);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_ratio() {
        let config = SimulationConfig::default().with_deadline_ratio(-0.1);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDeadlineRatio));
    }

    #[test]
    fn test_nan_ratio() {
        let config = SimulationConfig::default().with_deadline_ratio(f64::NAN);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_trials() {
        let config = SimulationConfig::default().with_trial_count(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroTrials);
    }

    #[test]
    fn test_no_strategies() {
        let config = SimulationConfig::default().with_strategies(Vec::new());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoStrategies));
    }

    #[test]
    fn test_duplicate_strategy() {
        let config = SimulationConfig::default()
            .with_strategies(vec![Strategy::DueFirst, Strategy::EasierFirst, Strategy::DueFirst]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateStrategy
                && e.message.contains("due-first")));
    }

    #[test]
    fn test_generator_errors() {
        let generator = GeneratorConfig::default()
            .with_weight_range(0, 99)
            .with_due_mean(f64::INFINITY)
            .with_due_pool_size(Some(0));
        let errors = validate_generator(&generator).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_multiple_errors() {
        let config = SimulationConfig::default()
            .with_deadline_ratio(-1.0)
            .with_trial_count(0)
            .with_generator(GeneratorConfig::default().with_weight_range(10, 5));
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
