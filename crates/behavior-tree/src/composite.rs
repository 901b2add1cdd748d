//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Neither composite remembers which child was running on the previous tick.
//! Every tick starts again at the first child.

use crate::{Behavior, BuildError, Node, Status};

/// Executes child behaviors in sequence until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: String,
    children: Vec<Node<C>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyComposite`] if `children` is empty.
    pub fn new(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Self, BuildError> {
        let name = name.into();
        if children.is_empty() {
            return Err(BuildError::EmptyComposite {
                kind: "Sequence",
                name,
            });
        }
        Ok(Self { name, children })
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        // Execute children in order until one does not succeed
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue, // Move to next child
                other => return other,       // Short-circuit on Failure or Running
            }
        }
        // All children succeeded
        Status::Success
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Executes child behaviors in sequence until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. The
/// earlier-listed child always wins when several could succeed.
pub struct Selector<C> {
    name: String,
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyComposite`] if `children` is empty.
    pub fn new(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Self, BuildError> {
        let name = name.into();
        if children.is_empty() {
            return Err(BuildError::EmptyComposite {
                kind: "Selector",
                name,
            });
        }
        Ok(Self { name, children })
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        // Try children in order until one succeeds or is still running
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue, // Try next child
                other => return other,       // Short-circuit on Success or Running
            }
        }
        // All children failed
        Status::Failure
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    /// Records which leaves ran, in order.
    #[derive(Default)]
    struct TestContext {
        trace: Vec<&'static str>,
    }

    fn leaf(label: &'static str, status: Status) -> Node<TestContext> {
        Node::Action(Action::new(label, move |ctx: &mut TestContext| {
            ctx.trace.push(label);
            status
        }))
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(
            "seq",
            vec![leaf("a", Status::Success), leaf("b", Status::Success)],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trace, ["a", "b"]);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new(
            "seq",
            vec![
                leaf("a", Status::Success),
                leaf("b", Status::Success),
                leaf("c", Status::Failure),
                leaf("d", Status::Success), // Should not execute
            ],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.trace, ["a", "b", "c"]);
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq = Sequence::new(
            "seq",
            vec![leaf("a", Status::Running), leaf("b", Status::Success)],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.trace, ["a"]);

        // No cursor: the next tick starts from the first child again
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.trace, ["a", "a"]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Selector::new(
            "sel",
            vec![
                leaf("a", Status::Failure),
                leaf("b", Status::Success),
                leaf("c", Status::Success), // Should not execute
            ],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.trace, ["a", "b"]);
    }

    #[test]
    fn selector_stops_on_running() {
        let sel = Selector::new(
            "sel",
            vec![
                leaf("a", Status::Failure),
                leaf("b", Status::Running),
                leaf("c", Status::Success), // Should not execute
            ],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.trace, ["a", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(
            "sel",
            vec![leaf("a", Status::Failure), leaf("b", Status::Failure)],
        )
        .unwrap();

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.trace, ["a", "b"]);
    }

    #[test]
    fn single_child_forwards_result() {
        for status in [Status::Success, Status::Failure, Status::Running] {
            let seq = Sequence::new("seq", vec![leaf("a", status)]).unwrap();
            let sel = Selector::new("sel", vec![leaf("a", status)]).unwrap();

            let mut ctx = TestContext::default();
            assert_eq!(seq.tick(&mut ctx), status);
            assert_eq!(sel.tick(&mut ctx), status);
        }
    }

    #[test]
    fn empty_composites_are_rejected() {
        let err = Sequence::<TestContext>::new("nothing", Vec::new()).err();
        assert_eq!(
            err,
            Some(BuildError::EmptyComposite {
                kind: "Sequence",
                name: "nothing".into(),
            })
        );
        assert!(Selector::<TestContext>::new("nothing", Vec::new()).is_err());
    }
}
