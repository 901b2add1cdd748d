//! Tick-driven decision making and kinematics for a single autonomous agent.
//!
//! `agent-core` wires the generic [`behavior_tree`] engine to world-specific
//! state: position, destination, score and animation label. Each call to
//! [`Agent::update`] advances the animation phase and evaluates the agent's
//! fixed behavior tree once, which chases, flees from, or wanders away from
//! a tracked opponent.
//!
//! The opponent is never looked up globally. Callers pass an
//! [`OpponentSnapshot`] into every update.
pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod nodes;
pub mod tree;

pub use agent::{Agent, AgentState, CollisionGroup, Facing};
pub use config::AgentConfig;
pub use context::{Activity, AgentContext, OpponentSnapshot};
pub use error::{AgentError, ConfigError};
pub use geometry::{BoundingBox, Point, WorldBounds};
