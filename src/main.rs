use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use u_dispatch_sim::dispatching::Strategy;
use u_dispatch_sim::simulation::{Simulation, SimulationConfig};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Monte Carlo comparison of task-ordering heuristics under a shared deadline.
///
/// Example:
///   u-dispatch-sim --ratio 0.5 --trials 20000 --batch-size 25 --seed 42 \
///                  --strategy due-first --strategy easier-first
#[derive(Debug, Parser)]
#[command(name = "u-dispatch-sim", version, long_about = None)]
struct Cli {
    /// YAML configuration file. Command-line values override it.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Deadline budget as a fraction of each batch's total duration.
    #[arg(short = 'r', long = "ratio")]
    deadline_ratio: Option<f64>,

    /// Trials per strategy.
    #[arg(short = 'n', long = "trials")]
    trial_count: Option<usize>,

    /// Tasks per batch.
    #[arg(short = 'b', long = "batch-size")]
    batch_size: Option<usize>,

    /// Base seed for reproducible runs.
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Strategy to evaluate (repeatable). Defaults to all seven.
    #[arg(long = "strategy")]
    strategies: Vec<Strategy>,

    /// Run trials on a single thread.
    #[arg(long = "sequential", default_value_t = false)]
    sequential: bool,

    /// Print the report as JSON instead of text.
    #[arg(long = "json", default_value_t = false)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(ratio) = self.deadline_ratio {
            config.deadline_ratio = ratio;
        }
        if let Some(trials) = self.trial_count {
            config.trial_count = trials;
        }
        if let Some(size) = self.batch_size {
            config.batch_size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if !self.strategies.is_empty() {
            config.strategies = self.strategies.clone();
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so stdout carries only the report.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    info!(
        deadline_ratio = config.deadline_ratio,
        trial_count    = config.trial_count,
        batch_size     = config.batch_size,
        seed           = ?config.seed,
        strategies     = config.strategies.len(),
        parallel       = config.parallel,
        "Configuration"
    );

    let simulation = Simulation::from_config(&config).context("building simulation")?;
    let report = simulation.run(&config).context("running simulation")?;
    info!(seed = report.seed, "Simulation finished");

    if cli.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        print!("{report}");
    }
    Ok(())
}
