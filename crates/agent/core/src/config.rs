//! Agent configuration constants and tunable parameters.

use crate::error::ConfigError;
use crate::geometry::{Point, WorldBounds};

/// Tunables fixed when an agent is created.
///
/// Distances in the behavior (radii) are expressed in meters and converted to
/// world units (pixels) through [`AgentConfig::pixels_per_meter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// World units per meter.
    pub pixels_per_meter: f32,
    /// Run speed in km/h.
    pub run_speed_kmph: f32,
    /// Opponent closer than this (meters) triggers chase or flee.
    pub nearby_radius: f32,
    /// Movement toward a point ends within this distance (meters).
    pub arrival_radius: f32,
    /// Half of the agent's square bounding box side, in pixels.
    pub half_extent: f32,
    /// Area random destinations are drawn from, before the half-extent inset.
    pub world: WorldBounds,
}

impl AgentConfig {
    // ===== animation =====
    pub const TIME_PER_ACTION: f32 = 0.5;
    pub const ACTION_PER_TIME: f32 = 1.0 / Self::TIME_PER_ACTION;
    pub const FRAMES_PER_ACTION: f32 = 10.0;

    // ===== runtime-tunable defaults =====
    /// 10 pixels per 30 cm.
    pub const DEFAULT_PIXELS_PER_METER: f32 = 10.0 / 0.3;
    pub const DEFAULT_RUN_SPEED_KMPH: f32 = 10.0;
    pub const DEFAULT_NEARBY_RADIUS: f32 = 7.0;
    pub const DEFAULT_ARRIVAL_RADIUS: f32 = 0.5;
    pub const DEFAULT_HALF_EXTENT: f32 = 50.0;
    pub const DEFAULT_WORLD: WorldBounds =
        WorldBounds::new(Point::ORIGIN, Point::new(1280.0, 1024.0));

    pub fn new() -> Self {
        Self {
            pixels_per_meter: Self::DEFAULT_PIXELS_PER_METER,
            run_speed_kmph: Self::DEFAULT_RUN_SPEED_KMPH,
            nearby_radius: Self::DEFAULT_NEARBY_RADIUS,
            arrival_radius: Self::DEFAULT_ARRIVAL_RADIUS,
            half_extent: Self::DEFAULT_HALF_EXTENT,
            world: Self::DEFAULT_WORLD,
        }
    }

    pub fn with_world(mut self, world: WorldBounds) -> Self {
        self.world = world;
        self
    }

    pub fn with_nearby_radius(mut self, meters: f32) -> Self {
        self.nearby_radius = meters;
        self
    }

    pub fn with_run_speed_kmph(mut self, kmph: f32) -> Self {
        self.run_speed_kmph = kmph;
        self
    }

    pub fn with_pixels_per_meter(mut self, pixels_per_meter: f32) -> Self {
        self.pixels_per_meter = pixels_per_meter;
        self
    }

    /// Run speed in world units per second.
    pub fn speed_pps(&self) -> f32 {
        let meters_per_minute = self.run_speed_kmph * 1000.0 / 60.0;
        let meters_per_second = meters_per_minute / 60.0;
        meters_per_second * self.pixels_per_meter
    }

    /// Converts a distance in meters to world units.
    #[inline]
    pub fn to_pixels(&self, meters: f32) -> f32 {
        meters * self.pixels_per_meter
    }

    /// Region an agent's centre may occupy while staying fully inside the world.
    pub fn roaming_area(&self) -> Option<WorldBounds> {
        self.world.inset(self.half_extent)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("pixels_per_meter", self.pixels_per_meter),
            ("run_speed_kmph", self.run_speed_kmph),
            ("nearby_radius", self.nearby_radius),
            ("arrival_radius", self.arrival_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !(self.half_extent.is_finite() && self.half_extent >= 0.0) {
            return Err(ConfigError::InvalidHalfExtent(self.half_extent));
        }

        let world = self.world;
        let finite = [
            world.min.x,
            world.min.y,
            world.max.x,
            world.max.y,
            world.width(),
            world.height(),
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::InvalidWorld {
                min: world.min,
                max: world.max,
            });
        }

        if self.roaming_area().is_none() {
            return Err(ConfigError::WorldTooSmall {
                width: self.world.width(),
                height: self.world.height(),
                half_extent: self.half_extent,
            });
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
