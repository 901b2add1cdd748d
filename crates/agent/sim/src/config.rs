//! Simulation configuration structures and loaders.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! `AGENT_SIM_*` environment variables, command-line flags.
use std::env;
use std::path::Path;

use agent_core::AgentConfig;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Everything the driver needs to run one simulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub agent: AgentConfig,
    pub ticks: u64,
    /// Seconds per tick.
    pub dt: f32,
    pub seed: u64,
    pub score_items: usize,
    pub opponent: OpponentConfig,
    /// Ticks between progress reports (0 disables them).
    pub report_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            ticks: 3_600,
            dt: 1.0 / 60.0,
            seed: 0,
            score_items: 4,
            opponent: OpponentConfig::default(),
            report_every: 60,
        }
    }
}

/// The scripted opponent the agent tracks.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Patrol speed in world units per second.
    pub speed: f32,
    pub score: u32,
    /// Waypoints visited in order, looping back to the first.
    pub patrol: Vec<[f32; 2]>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            speed: 120.0,
            score: 0,
            patrol: vec![[300.0, 300.0], [980.0, 300.0], [980.0, 724.0], [300.0, 724.0]],
        }
    }
}

impl SimConfig {
    /// Parses a TOML file, keeping defaults for anything it omits.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overrides fields from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_SIM_TICKS` - Number of ticks to simulate
    /// - `AGENT_SIM_DT` - Seconds per tick
    /// - `AGENT_SIM_SEED` - RNG seed
    /// - `AGENT_SIM_SCORE_ITEMS` - Number of score items on the map
    /// - `AGENT_SIM_OPPONENT_SCORE` - Opponent's fixed score
    /// - `AGENT_SIM_REPORT_EVERY` - Ticks between progress reports
    pub fn apply_env(&mut self) {
        if let Some(ticks) = read_env("AGENT_SIM_TICKS") {
            self.ticks = ticks;
        }
        if let Some(dt) = read_env("AGENT_SIM_DT") {
            self.dt = dt;
        }
        if let Some(seed) = read_env("AGENT_SIM_SEED") {
            self.seed = seed;
        }
        if let Some(items) = read_env("AGENT_SIM_SCORE_ITEMS") {
            self.score_items = items;
        }
        if let Some(score) = read_env("AGENT_SIM_OPPONENT_SCORE") {
            self.opponent.score = score;
        }
        if let Some(every) = read_env("AGENT_SIM_REPORT_EVERY") {
            self.report_every = every;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.agent.validate()?;
        anyhow::ensure!(
            self.dt.is_finite() && self.dt > 0.0,
            "dt must be positive, got {}",
            self.dt
        );
        anyhow::ensure!(
            !self.opponent.patrol.is_empty(),
            "opponent patrol needs at least one waypoint"
        );
        anyhow::ensure!(
            self.opponent.speed.is_finite() && self.opponent.speed >= 0.0,
            "opponent speed must be finite and non-negative, got {}",
            self.opponent.speed
        );
        if let Some([x, y]) = self
            .opponent
            .patrol
            .iter()
            .find(|[x, y]| !(x.is_finite() && y.is_finite()))
        {
            anyhow::bail!("opponent waypoint ({x}, {y}) is not finite");
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
