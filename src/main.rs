use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use verdant_core::config::AppConfig;
use verdant_lib::Simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Seed overriding the configured one
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(path: &PathBuf) -> Result<AppConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    AppConfig::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut sim = Simulation::new(config)?;
    sim.populate();
    let reports = sim.run(args.ticks);

    let metrics = sim.metrics();
    let summary = serde_json::json!({
        "ticks": reports.len(),
        "organisms": sim.organisms().len(),
        "plants": sim.plants().len(),
        "births": metrics.counter(verdant_core::metrics::BIRTHS),
        "deaths": metrics.counter(verdant_core::metrics::DEATHS),
        "seeds_dispersed": metrics.counter(verdant_core::metrics::SEEDS_DISPERSED),
        "plants_germinated": metrics.counter(verdant_core::metrics::PLANTS_GERMINATED),
        "elapsed_ms": metrics.elapsed().as_millis() as u64,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        tracing::info!(%summary, "Simulation finished");
    }
    Ok(())
}
