//! Per-agent blackboard the behavior tree is evaluated against.
//!
//! The [`AgentContext`] holds the agent's live state together with the
//! inputs of the current tick (elapsed time and opponent snapshot). Tree
//! leaves are closures over its methods, so conditions and actions always
//! observe the current position and score rather than a copy.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::agent::AgentState;
use crate::config::AgentConfig;
use crate::geometry::{Point, WorldBounds};

/// Read-only view of the tracked opponent, taken when the agent updates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentSnapshot {
    pub position: Point,
    pub score: u32,
}

impl OpponentSnapshot {
    pub const fn new(position: Point, score: u32) -> Self {
        Self { position, score }
    }
}

/// Branch of the tree the agent acted through on its latest tick.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Activity {
    #[default]
    Idle,
    Chasing,
    Fleeing,
    Wandering,
}

/// Live agent state plus the inputs of the tick being evaluated.
pub struct AgentContext {
    pub(crate) config: AgentConfig,
    /// Validated area random destinations are drawn from.
    pub(crate) roaming: WorldBounds,
    pub(crate) position: Point,
    pub(crate) target: Point,
    /// `target` was picked by the wander branch and not reached yet.
    pub(crate) destination_pending: bool,
    /// Last computed heading in radians.
    pub(crate) direction: f32,
    pub(crate) score: u32,
    pub(crate) state: AgentState,
    pub(crate) activity: Activity,
    pub(crate) opponent: OpponentSnapshot,
    /// Seconds elapsed since the previous tick.
    pub(crate) dt: f32,
    pub(crate) rng: StdRng,
}

impl AgentContext {
    /// Creates a context for an agent standing at `position`.
    ///
    /// `roaming` must already be validated against the config.
    pub(crate) fn new(config: AgentConfig, roaming: WorldBounds, position: Point, seed: u64) -> Self {
        Self {
            config,
            roaming,
            position,
            target: position,
            destination_pending: false,
            direction: 0.0,
            score: 0,
            state: AgentState::Idle,
            activity: Activity::Idle,
            opponent: OpponentSnapshot::default(),
            dt: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stores the inputs of the tick about to be evaluated.
    pub(crate) fn begin_tick(&mut self, dt: f32, opponent: &OpponentSnapshot) {
        self.dt = dt;
        self.opponent = *opponent;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn opponent(&self) -> &OpponentSnapshot {
        &self.opponent
    }

    // ========================================================================
    // Kinematics
    // ========================================================================

    /// World units covered during the current tick.
    #[inline]
    pub(crate) fn step_distance(&self) -> f32 {
        self.config.speed_pps() * self.dt
    }

    /// Whether `a` and `b` are at most `meters` apart, compared squared.
    #[inline]
    pub(crate) fn distance_less_than(&self, a: Point, b: Point, meters: f32) -> bool {
        let limit = self.config.to_pixels(meters);
        a.distance_squared(b) <= limit * limit
    }

    /// Advances one tick's worth of distance toward `goal`.
    ///
    /// The step is clamped to the remaining distance so a fixed goal is
    /// approached monotonically. Standing on the goal leaves position and
    /// heading untouched.
    pub(crate) fn move_slightly_to(&mut self, goal: Point) {
        let Some(heading) = self.position.heading_to(goal) else {
            return;
        };
        self.direction = heading;

        let remaining = self.position.distance(goal);
        let step = self.step_distance();
        self.position = if step >= remaining {
            goal
        } else {
            self.position.advance(heading, step)
        };
    }

    /// Advances one tick's worth of distance directly away from `threat`.
    ///
    /// With the threat exactly on top of the agent the previous heading is kept.
    pub(crate) fn run_slightly_from(&mut self, threat: Point) {
        let heading = threat.heading_to(self.position).unwrap_or(self.direction);
        self.direction = heading;
        self.position = self.position.advance(heading, self.step_distance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_at(position: Point) -> AgentContext {
        let config = AgentConfig::default();
        let roaming = config.roaming_area().unwrap();
        let mut ctx = AgentContext::new(config, roaming, position, 7);
        ctx.begin_tick(0.1, &OpponentSnapshot::default());
        ctx
    }

    #[test]
    fn step_is_clamped_at_goal() {
        let mut ctx = context_at(Point::ORIGIN);
        let goal = Point::new(1.0, 0.0);

        ctx.move_slightly_to(goal);
        assert_eq!(ctx.position, goal);

        // Already there: nothing moves, heading is kept
        ctx.direction = 1.25;
        ctx.move_slightly_to(goal);
        assert_eq!(ctx.position, goal);
        assert_eq!(ctx.direction, 1.25);
    }

    #[test]
    fn retreat_keeps_heading_when_cornered() {
        let mut ctx = context_at(Point::new(10.0, 10.0));
        ctx.direction = std::f32::consts::PI;

        ctx.run_slightly_from(Point::new(10.0, 10.0));
        assert!(ctx.position.x < 10.0);
        assert!((ctx.position.y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn distance_check_scales_meters_to_pixels() {
        let ctx = context_at(Point::ORIGIN);
        // 1 m = 33.3.. px
        assert!(ctx.distance_less_than(Point::ORIGIN, Point::new(33.0, 0.0), 1.0));
        assert!(!ctx.distance_less_than(Point::ORIGIN, Point::new(34.0, 0.0), 1.0));
    }
}
