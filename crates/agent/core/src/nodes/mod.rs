//! Condition and action callables invoked by the agent's tree leaves.
//!
//! Both are plain methods on [`crate::AgentContext`]. The tree binds them into
//! [`behavior_tree::Condition`] and [`behavior_tree::Action`] nodes once, when
//! the agent is built (see [`crate::tree`]).
//!
//! - Conditions take `&self` and return `bool`
//! - Actions take `&mut self` and return a [`behavior_tree::Status`]

pub mod actions;
pub mod conditions;
