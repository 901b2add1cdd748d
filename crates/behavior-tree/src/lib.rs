//! Lightweight behavior tree library for tick-driven simulations.
//!
//! The tree is re-evaluated from the root on every tick:
//!
//! - **Tri-state results**: nodes return `Success`, `Failure` or `Running`
//! - **No cursor**: a `Running` leaf is simply re-entered on the next tick
//! - **Closed node set**: [`Action`], [`Condition`], [`Sequence`], [`Selector`]
//! - **Fixed topology**: trees are assembled once and never mutated
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - [`Node`]: The four node kinds behind one enum
//! - [`BehaviorTree`]: Owns the root and exposes [`BehaviorTree::run`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use error::BuildError;
pub use leaf::{Action, Condition};
pub use node::Node;
pub use status::Status;
pub use tree::BehaviorTree;
