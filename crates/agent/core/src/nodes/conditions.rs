//! Conditions over the agent and its opponent.
//!
//! Conditions only read state. Each maps to `Success` when it returns `true`.

use crate::context::AgentContext;

impl AgentContext {
    /// Whether the opponent stands within `radius` meters.
    ///
    /// Symmetric in the two positions.
    pub fn is_opponent_nearby(&self, radius: f32) -> bool {
        self.distance_less_than(self.opponent.position, self.position, radius)
    }

    /// Own score is lower than or equal to the opponent's (chase branch).
    pub fn has_score_deficit(&self) -> bool {
        self.score <= self.opponent.score
    }

    /// Own score is strictly higher than the opponent's (flee branch).
    pub fn has_score_surplus(&self) -> bool {
        self.score > self.opponent.score
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AgentConfig;
    use crate::context::{AgentContext, OpponentSnapshot};
    use crate::geometry::Point;

    fn context(me: Point, opponent: Point) -> AgentContext {
        let config = AgentConfig::default();
        let mut ctx = AgentContext::new(config, config.roaming_area().unwrap(), me, 1);
        ctx.begin_tick(0.016, &OpponentSnapshot::new(opponent, 0));
        ctx
    }

    #[test]
    fn nearby_is_symmetric() {
        let a = Point::new(12.0, 40.0);
        let b = Point::new(210.0, -35.0);
        for radius in [1.0, 5.0, 6.4, 6.5, 7.0, 20.0] {
            assert_eq!(
                context(a, b).is_opponent_nearby(radius),
                context(b, a).is_opponent_nearby(radius),
                "radius {radius}"
            );
        }
    }

    #[test]
    fn nearby_boundary_is_inclusive() {
        // 3 m at 100 px/m is exactly 300 px
        let config = AgentConfig::default().with_pixels_per_meter(100.0);
        let mut ctx = AgentContext::new(config, config.roaming_area().unwrap(), Point::ORIGIN, 1);
        ctx.begin_tick(0.016, &OpponentSnapshot::new(Point::new(300.0, 0.0), 0));
        assert!(ctx.is_opponent_nearby(3.0));
        assert!(!ctx.is_opponent_nearby(2.99));
    }

    #[test]
    fn score_branches_partition() {
        let mut ctx = context(Point::ORIGIN, Point::ORIGIN);
        for (own, theirs) in [(0, 0), (1, 3), (5, 0), (4, 4), (7, 6)] {
            ctx.score = own;
            ctx.opponent.score = theirs;
            assert_ne!(ctx.has_score_deficit(), ctx.has_score_surplus());
        }

        ctx.score = 0;
        ctx.opponent.score = 0;
        assert!(ctx.has_score_deficit(), "a tie chases");
    }
}
