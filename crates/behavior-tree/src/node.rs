//! The closed set of node kinds.

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

/// A behavior tree node.
///
/// Trees have a fixed topology, so the node kinds are a closed enum rather
/// than an open trait-object hierarchy.
pub enum Node<C> {
    Action(Action<C>),
    Condition(Condition<C>),
    Sequence(Sequence<C>),
    Selector(Selector<C>),
}

impl<C> Node<C> {
    /// Kind label used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Node::Action(_) => "Action",
            Node::Condition(_) => "Condition",
            Node::Sequence(_) => "Sequence",
            Node::Selector(_) => "Selector",
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Sequence(seq) => seq.children(),
            Node::Selector(sel) => sel.children(),
            Node::Action(_) | Node::Condition(_) => &[],
        }
    }

    /// Depth of the subtree rooted at this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl<C> Behavior<C> for Node<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let status = match self {
            Node::Action(action) => action.tick(ctx),
            Node::Condition(condition) => condition.tick(ctx),
            Node::Sequence(seq) => seq.tick(ctx),
            Node::Selector(sel) => sel.tick(ctx),
        };
        tracing::trace!(kind = self.kind(), node = self.name(), %status, "node ticked");
        status
    }

    fn name(&self) -> &str {
        match self {
            Node::Action(action) => action.name(),
            Node::Condition(condition) => condition.name(),
            Node::Sequence(seq) => seq.name(),
            Node::Selector(sel) => sel.name(),
        }
    }
}

impl<C> From<Action<C>> for Node<C> {
    fn from(value: Action<C>) -> Self {
        Node::Action(value)
    }
}

impl<C> From<Condition<C>> for Node<C> {
    fn from(value: Condition<C>) -> Self {
        Node::Condition(value)
    }
}

impl<C> From<Sequence<C>> for Node<C> {
    fn from(value: Sequence<C>) -> Self {
        Node::Sequence(value)
    }
}

impl<C> From<Selector<C>> for Node<C> {
    fn from(value: Selector<C>) -> Self {
        Node::Selector(value)
    }
}
