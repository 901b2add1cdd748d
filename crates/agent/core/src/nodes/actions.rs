//! Actions that move the agent.
//!
//! Every action is re-entrant: the tree keeps no cursor, so a `Running`
//! action is called again from scratch next tick and re-derives its heading
//! from the live positions.
//!
//! The wander branch re-runs "Set random destination" on every tick as well.
//! A destination therefore stays pending until it is reached, or until the
//! agent chases or flees, and only then is a new one drawn.

use behavior_tree::Status;
use rand::Rng;

use crate::agent::AgentState;
use crate::context::{Activity, AgentContext};
use crate::geometry::Point;

impl AgentContext {
    /// Picks a uniformly random destination inside the roaming area, unless
    /// the previous one is still pending.
    ///
    /// Always succeeds within the tick.
    pub fn set_random_destination(&mut self) -> Status {
        self.activity = Activity::Wandering;
        if self.destination_pending {
            return Status::Success;
        }

        let area = self.roaming;
        self.target = Point::new(
            self.rng.gen_range(area.min.x..=area.max.x),
            self.rng.gen_range(area.min.y..=area.max.y),
        );
        self.destination_pending = true;
        tracing::debug!(destination = %self.target, "picked random destination");
        Status::Success
    }

    /// Walks toward the stored destination.
    ///
    /// Returns `Success` once within `arrival_radius` meters, `Running` before.
    pub fn move_to_destination(&mut self, arrival_radius: f32) -> Status {
        self.state = AgentState::Walk;
        self.activity = Activity::Wandering;
        let goal = self.target;
        self.move_slightly_to(goal);
        if self.distance_less_than(self.position, goal, arrival_radius) {
            self.destination_pending = false;
            tracing::debug!(position = %self.position, "arrived at destination");
            Status::Success
        } else {
            Status::Running
        }
    }

    /// Walks toward the opponent's current position.
    ///
    /// Returns `Success` once within `arrival_radius` meters, `Running` before.
    pub fn move_to_opponent(&mut self, arrival_radius: f32) -> Status {
        self.state = AgentState::Walk;
        self.activity = Activity::Chasing;
        self.destination_pending = false;
        let goal = self.opponent.position;
        self.move_slightly_to(goal);
        if self.distance_less_than(self.position, goal, arrival_radius) {
            Status::Success
        } else {
            Status::Running
        }
    }

    /// Runs straight away from the opponent.
    ///
    /// Never terminates on its own; the chase/flee conditions re-route the
    /// agent on a later tick.
    pub fn run_from_opponent(&mut self) -> Status {
        self.state = AgentState::Walk;
        self.activity = Activity::Fleeing;
        self.destination_pending = false;
        let threat = self.opponent.position;
        self.run_slightly_from(threat);
        Status::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::context::OpponentSnapshot;

    fn context_at(position: Point, dt: f32) -> AgentContext {
        let config = AgentConfig::default();
        let mut ctx = AgentContext::new(config, config.roaming_area().unwrap(), position, 42);
        ctx.begin_tick(dt, &OpponentSnapshot::default());
        ctx
    }

    #[test]
    fn random_destination_stays_inside_roaming_area() {
        let mut ctx = context_at(Point::new(640.0, 512.0), 0.016);
        let area = ctx.roaming;
        for _ in 0..500 {
            ctx.destination_pending = false;
            assert_eq!(ctx.set_random_destination(), Status::Success);
            assert!(area.contains(ctx.target), "{} outside", ctx.target);
        }
    }

    #[test]
    fn pending_destination_is_kept_until_reached() {
        let mut ctx = context_at(Point::new(640.0, 512.0), 1.0 / 60.0);
        ctx.set_random_destination();
        let first = ctx.target;

        assert_eq!(ctx.set_random_destination(), Status::Success);
        assert_eq!(ctx.target, first);

        ctx.position = first;
        assert_eq!(ctx.move_to_destination(0.5), Status::Success);
        assert!(!ctx.destination_pending);
        ctx.set_random_destination();
        assert_ne!(ctx.target, first);
    }

    #[test]
    fn move_to_destination_converges_monotonically() {
        let mut ctx = context_at(Point::new(100.0, 100.0), 1.0 / 60.0);
        ctx.target = Point::new(400.0, 250.0);

        let mut last = ctx.position.distance(ctx.target);
        let mut ticks = 0;
        loop {
            let status = ctx.move_to_destination(0.5);
            let now = ctx.position.distance(ctx.target);
            assert!(now < last, "distance must shrink: {now} >= {last}");
            last = now;
            ticks += 1;
            if status == Status::Success {
                break;
            }
            assert_eq!(status, Status::Running);
            assert!(ticks < 10_000, "never arrived");
        }
        assert!(last <= ctx.config.to_pixels(0.5));
        assert_eq!(ctx.state, AgentState::Walk);
    }

    #[test]
    fn large_time_step_does_not_overshoot() {
        let mut ctx = context_at(Point::ORIGIN, 60.0);
        ctx.target = Point::new(30.0, 40.0);
        assert_eq!(ctx.move_to_destination(0.5), Status::Success);
        assert_eq!(ctx.position, ctx.target);
    }

    #[test]
    fn standing_on_destination_counts_as_arrived() {
        let mut ctx = context_at(Point::new(200.0, 200.0), 0.0);
        ctx.target = ctx.position;
        assert_eq!(ctx.move_to_destination(0.5), Status::Success);
        assert_eq!(ctx.position, Point::new(200.0, 200.0));
    }

    #[test]
    fn flee_always_runs() {
        let mut ctx = context_at(Point::new(50.0, 0.0), 0.1);
        ctx.opponent = OpponentSnapshot::new(Point::ORIGIN, 0);
        for _ in 0..5 {
            assert_eq!(ctx.run_from_opponent(), Status::Running);
        }
        assert!(ctx.position.x > 50.0);
        assert_eq!(ctx.activity, Activity::Fleeing);
    }
}
