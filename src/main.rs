use clap::Parser;
use ricker_ensemble::config::SimulationConfig;
use ricker_ensemble::run_report;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Monte Carlo ensemble simulation of Ricker population dynamics"
)]
struct Cli {
    /// Mean intrinsic growth rate on the log scale
    #[arg(long)]
    mu: Option<f64>,

    /// Interannual standard deviation of the intrinsic growth rate
    #[arg(long)]
    sigma: Option<f64>,

    /// Abundance in year 0
    #[arg(long)]
    n0: Option<f64>,

    /// Carrying capacity
    #[arg(long)]
    k: Option<f64>,

    /// Years to simulate beyond year 0
    #[arg(long)]
    years: Option<usize>,

    /// Draw a fresh stochastic growth rate each year (true/false)
    #[arg(long)]
    env_stoch: Option<bool>,

    /// Independent replicate trajectories in the ensemble
    #[arg(long)]
    replicates: Option<usize>,

    /// Summarize log abundance instead of raw abundance (true/false)
    #[arg(long)]
    log_summaries: Option<bool>,

    /// Master random seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = SimulationConfig::default();
    if let Some(v) = cli.mu {
        cfg.mu = v;
    }
    if let Some(v) = cli.sigma {
        cfg.sigma = v;
    }
    if let Some(v) = cli.n0 {
        cfg.n0 = v;
    }
    if let Some(v) = cli.k {
        cfg.k = v;
    }
    if let Some(v) = cli.years {
        cfg.max_years = v;
    }
    if let Some(v) = cli.env_stoch {
        cfg.env_stoch = v;
    }
    if let Some(v) = cli.replicates {
        cfg.replicates = v;
    }
    if let Some(v) = cli.log_summaries {
        cfg.log_summaries = v;
    }
    if let Some(v) = cli.seed {
        cfg.seed = v;
    }

    let report = run_report(&cfg)?;
    print!("{report}");

    Ok(())
}
