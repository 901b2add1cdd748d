//! Minimal world around one agent: a patrolling opponent and score items.
use agent_core::{Agent, BoundingBox, OpponentSnapshot, Point, WorldBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;

/// Half side of a score item's bounding box.
const ITEM_HALF_EXTENT: f32 = 10.0;

/// Opponent walking a closed loop of waypoints at constant speed.
#[derive(Clone, Debug)]
pub struct Patrol {
    position: Point,
    waypoints: Vec<Point>,
    next: usize,
    speed: f32,
    score: u32,
}

impl Patrol {
    pub fn new(waypoints: Vec<Point>, speed: f32, score: u32) -> Self {
        let position = waypoints.first().copied().unwrap_or_default();
        Self {
            position,
            next: 1 % waypoints.len().max(1),
            waypoints,
            speed,
            score,
        }
    }

    /// Moves `speed * dt` along the loop, turning at waypoints.
    pub fn advance(&mut self, dt: f32) {
        let mut budget = self.speed * dt;
        // A loop of coincident waypoints would never consume the budget
        for _ in 0..=self.waypoints.len() {
            let Some(&goal) = self.waypoints.get(self.next) else {
                return;
            };
            let remaining = self.position.distance(goal);
            if budget < remaining {
                if let Some(heading) = self.position.heading_to(goal) {
                    self.position = self.position.advance(heading, budget);
                }
                return;
            }
            budget -= remaining;
            self.position = goal;
            self.next = (self.next + 1) % self.waypoints.len();
        }
    }

    pub fn snapshot(&self) -> OpponentSnapshot {
        OpponentSnapshot::new(self.position, self.score)
    }
}

/// Per-tick observations for progress reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub collected: u32,
}

pub struct World {
    pub agent: Agent,
    pub opponent: Patrol,
    items: Vec<Point>,
    item_area: WorldBounds,
    rng: StdRng,
}

impl World {
    pub fn new(config: &SimConfig) -> anyhow::Result<Self> {
        let agent = Agent::spawn(config.agent, config.seed)?;
        let waypoints = config
            .opponent
            .patrol
            .iter()
            .map(|&[x, y]| Point::new(x, y))
            .collect();
        let opponent = Patrol::new(waypoints, config.opponent.speed, config.opponent.score);

        let item_area = config
            .agent
            .world
            .inset(ITEM_HALF_EXTENT)
            .ok_or_else(|| anyhow::anyhow!("world too small for score items"))?;
        // Items use their own stream so the agent's seed stays independent
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        let items = (0..config.score_items)
            .map(|_| random_point(&mut rng, item_area))
            .collect();

        Ok(Self {
            agent,
            opponent,
            items,
            item_area,
            rng,
        })
    }

    pub fn items(&self) -> &[Point] {
        &self.items
    }

    /// One simulation frame: opponent, agent, then collision dispatch.
    pub fn step(&mut self, dt: f32) -> TickReport {
        self.opponent.advance(dt);
        self.agent.update(dt, &self.opponent.snapshot());

        let mut report = TickReport::default();
        let agent_box = self.agent.bounding_box();
        for item in &mut self.items {
            if agent_box.intersects(&BoundingBox::around(*item, ITEM_HALF_EXTENT)) {
                self.agent.on_collision("score-item");
                report.collected += 1;
                *item = random_point(&mut self.rng, self.item_area);
                tracing::debug!(respawned = %item, "score item collected");
            }
        }
        report
    }
}

fn random_point(rng: &mut StdRng, area: WorldBounds) -> Point {
    Point::new(
        rng.gen_range(area.min.x..=area.max.x),
        rng.gen_range(area.min.y..=area.max.y),
    )
}
