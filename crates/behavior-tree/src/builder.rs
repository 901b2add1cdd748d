//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::Sequence(Sequence::new(name, vec![...])?)`, you can use shorter
//! functions like `sequence(name, vec![...])?`.

use crate::{Action, BuildError, Condition, Node, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Node::Sequence(Sequence::new(name, children)?)`.
#[inline]
pub fn sequence<C>(
    name: impl Into<String>,
    children: Vec<Node<C>>,
) -> Result<Node<C>, BuildError> {
    Sequence::new(name, children).map(Node::Sequence)
}

/// Creates a selector node.
///
/// Shorthand for `Node::Selector(Selector::new(name, children)?)`.
#[inline]
pub fn selector<C>(
    name: impl Into<String>,
    children: Vec<Node<C>>,
) -> Result<Node<C>, BuildError> {
    Selector::new(name, children).map(Node::Selector)
}

/// Creates a condition node.
#[inline]
pub fn condition<C, F>(name: impl Into<String>, predicate: F) -> Node<C>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Node::Condition(Condition::new(name, predicate))
}

/// Creates an action node.
#[inline]
pub fn action<C, F>(name: impl Into<String>, task: F) -> Node<C>
where
    F: Fn(&mut C) -> Status + Send + Sync + 'static,
{
    Node::Action(Action::new(name, task))
}
