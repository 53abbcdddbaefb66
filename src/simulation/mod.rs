//! Monte Carlo evaluation of ordering strategies.
//!
//! Ties the pieces together: a [`SimulationConfig`] describes the sweep,
//! [`Simulation`] runs and averages the trials, and [`SimulationReport`]
//! carries the per-strategy results to the console or to JSON.
//!
//! # Usage
//!
//! ```
//! use u_dispatch_sim::dispatching::Strategy;
//! use u_dispatch_sim::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_trial_count(100)
//!     .with_seed(42)
//!     .with_strategies(vec![Strategy::DueFirst, Strategy::EasierFirst]);
//!
//! let report = Simulation::from_config(&config).unwrap().run(&config).unwrap();
//! assert_eq!(report.results.len(), 2);
//! println!("{report}");
//! ```

mod config;
mod report;
mod runner;

pub use config::SimulationConfig;
pub use report::{SimulationReport, StrategyResult};
pub use runner::Simulation;
