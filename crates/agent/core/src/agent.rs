//! The agent facade driven by the outer simulation loop.

use behavior_tree::BehaviorTree;
use rand::Rng;

use crate::config::AgentConfig;
use crate::context::{Activity, AgentContext, OpponentSnapshot};
use crate::error::{AgentError, ConfigError};
use crate::geometry::{BoundingBox, Point};
use crate::tree::build_behavior_tree;

/// Discrete state read by the renderer to pick an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Idle,
    Walk,
}

/// Horizontal facing derived from the heading, for sprite mirroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

/// Collision categories an agent reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CollisionGroup {
    /// Collectible that raises the score.
    ScoreItem,
    Opponent,
}

/// An autonomous actor that owns its state and its fixed behavior tree.
pub struct Agent {
    ctx: AgentContext,
    tree: BehaviorTree<AgentContext>,
    /// Animation phase in `[0, FRAMES_PER_ACTION)`.
    frame: f32,
}

impl Agent {
    /// Creates an agent standing at `position`.
    ///
    /// `seed` drives the agent's random destinations and initial animation
    /// frame, so runs are reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Config`] if `config` does not validate.
    pub fn new(config: AgentConfig, position: Point, seed: u64) -> Result<Self, AgentError> {
        let agent = Self::build(config, position, seed)?;
        tracing::debug!(%position, seed, "agent created");
        Ok(agent)
    }

    /// Creates an agent at a random position inside the roaming area.
    pub fn spawn(config: AgentConfig, seed: u64) -> Result<Self, AgentError> {
        let mut agent = Self::build(config, Point::ORIGIN, seed)?;
        let area = agent.ctx.roaming;
        let position = Point::new(
            agent.ctx.rng.gen_range(area.min.x..=area.max.x),
            agent.ctx.rng.gen_range(area.min.y..=area.max.y),
        );
        agent.ctx.position = position;
        agent.ctx.target = position;

        tracing::debug!(%position, seed, "agent spawned");
        Ok(agent)
    }

    fn build(config: AgentConfig, position: Point, seed: u64) -> Result<Self, AgentError> {
        config.validate()?;
        let roaming = config.roaming_area().ok_or(ConfigError::WorldTooSmall {
            width: config.world.width(),
            height: config.world.height(),
            half_extent: config.half_extent,
        })?;

        let tree = build_behavior_tree(&config)?;
        let mut ctx = AgentContext::new(config, roaming, position, seed);
        let frame = ctx.rng.gen_range(0..AgentConfig::FRAMES_PER_ACTION as u32) as f32;
        Ok(Self { ctx, tree, frame })
    }

    /// Advances the animation phase and evaluates the behavior tree once.
    ///
    /// `dt` is the elapsed time in seconds; a negative or non-finite value is
    /// treated as zero so a bad frame cannot push the agent off the map.
    pub fn update(&mut self, dt: f32, opponent: &OpponentSnapshot) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "ignoring invalid elapsed time");
            0.0
        };

        self.frame = (self.frame
            + AgentConfig::FRAMES_PER_ACTION * AgentConfig::ACTION_PER_TIME * dt)
            % AgentConfig::FRAMES_PER_ACTION;

        let before = self.ctx.activity;
        self.ctx.begin_tick(dt, opponent);
        let status = self.tree.run(&mut self.ctx);

        if self.ctx.activity != before {
            tracing::debug!(
                from = %before,
                to = %self.ctx.activity,
                position = %self.ctx.position,
                "activity changed"
            );
        }
        tracing::trace!(%status, position = %self.ctx.position, "agent updated");
    }

    /// Collision notification from the host.
    ///
    /// Only [`CollisionGroup::ScoreItem`] has an effect: the score goes up by one.
    pub fn on_collision(&mut self, group: &str) {
        match group.parse::<CollisionGroup>() {
            Ok(CollisionGroup::ScoreItem) => {
                self.ctx.score = self.ctx.score.saturating_add(1);
                tracing::debug!(score = self.ctx.score, "collected score item");
            }
            Ok(other) => tracing::trace!(group = ?other, "collision ignored"),
            Err(_) => tracing::trace!(group, "unknown collision group"),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.ctx.position, self.ctx.config.half_extent)
    }

    /// This agent as seen by an opponent.
    pub fn snapshot(&self) -> OpponentSnapshot {
        OpponentSnapshot::new(self.ctx.position, self.ctx.score)
    }

    pub fn position(&self) -> Point {
        self.ctx.position
    }

    /// Last commanded destination.
    pub fn target(&self) -> Point {
        self.ctx.target
    }

    /// Last heading in radians.
    pub fn direction(&self) -> f32 {
        self.ctx.direction
    }

    pub fn facing(&self) -> Facing {
        if self.ctx.direction.cos() < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn state(&self) -> AgentState {
        self.ctx.state
    }

    pub fn activity(&self) -> Activity {
        self.ctx.activity
    }

    pub fn score(&self) -> u32 {
        self.ctx.score
    }

    pub fn frame(&self) -> f32 {
        self.frame
    }

    /// Sprite index for the current animation phase.
    pub fn frame_index(&self) -> usize {
        self.frame as usize
    }

    pub fn config(&self) -> &AgentConfig {
        &self.ctx.config
    }
}
