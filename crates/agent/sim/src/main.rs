//! Headless driver: runs one agent against a patrolling opponent.
mod config;
mod world;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::SimConfig;
use world::World;

/// Simulate an agent deciding between chase, flee and wander
#[derive(Parser)]
#[command(name = "agent-sim")]
#[command(about = "Headless behavior tree agent simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file with simulation and agent settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds per tick
    #[arg(long)]
    dt: Option<f32>,

    /// RNG seed for spawn point, destinations and items
    #[arg(long)]
    seed: Option<u64>,

    /// Number of score items on the map
    #[arg(long)]
    score_items: Option<usize>,

    /// Opponent's fixed score
    #[arg(long)]
    opponent_score: Option<u32>,

    /// Also write logs into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_dir.as_deref())?;

    let config = load_config(&cli)?;
    run(&config)
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    config.apply_env();

    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(items) = cli.score_items {
        config.score_items = items;
    }
    if let Some(score) = cli.opponent_score {
        config.opponent.score = score;
    }

    config.validate()?;
    Ok(config)
}

fn run(config: &SimConfig) -> Result<()> {
    let mut world = World::new(config)?;
    tracing::info!(
        ticks = config.ticks,
        dt = config.dt,
        seed = config.seed,
        items = world.items().len(),
        start = %world.agent.position(),
        "simulation started"
    );

    let mut collected = 0;
    for tick in 1..=config.ticks {
        collected += world.step(config.dt).collected;

        if config.report_every > 0 && tick % config.report_every == 0 {
            let agent = &world.agent;
            tracing::info!(
                tick,
                position = %agent.position(),
                state = %agent.state(),
                activity = %agent.activity(),
                score = agent.score(),
                opponent = %world.opponent.snapshot().position,
                "progress"
            );
        }
    }

    tracing::info!(
        collected,
        score = world.agent.score(),
        position = %world.agent.position(),
        "simulation finished"
    );
    Ok(())
}

/// Setup logging to stderr and, if requested, to a file
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "agent-sim.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
