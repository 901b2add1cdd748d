//! Error types for agent construction.
//!
//! Ticking an agent never fails: every failure mode is caught when the agent
//! is built, either by validating its configuration or by rejecting a
//! malformed tree.

use behavior_tree::BuildError;

use crate::geometry::Point;

/// Invalid tunable in [`crate::AgentConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("half extent must be finite and non-negative, got {0}")]
    InvalidHalfExtent(f32),

    #[error("world bounds {min} - {max} must be finite with a finite size")]
    InvalidWorld { min: Point, max: Point },

    #[error("world {width}x{height} is too small for an agent with half extent {half_extent}")]
    WorldTooSmall {
        width: f32,
        height: f32,
        half_extent: f32,
    },
}

/// Errors raised while constructing an [`crate::Agent`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AgentError {
    #[error("invalid agent configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid behavior tree: {0}")]
    Tree(#[from] BuildError),
}
