//! Tree wrapper and per-tick entry point.

use crate::{Behavior, Node, Status};

/// Owns the root node of a fixed behavior tree.
///
/// The tree is built once and never mutated. [`BehaviorTree::run`] is meant to
/// be called exactly once per simulation tick by a single caller.
pub struct BehaviorTree<C> {
    root: Node<C>,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Node<C>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Evaluates the whole tree from the root.
    ///
    /// Nothing consumes the status above the root; it is returned so callers
    /// can log it.
    pub fn run(&self, ctx: &mut C) -> Status {
        let _span = tracing::trace_span!("behavior_tree", root = self.root.name()).entered();
        self.root.tick(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{action, condition, selector, sequence};

    struct Counter {
        value: u32,
        limit: u32,
    }

    fn counting_tree() -> BehaviorTree<Counter> {
        let root = selector(
            "count or reset",
            vec![
                sequence(
                    "count",
                    vec![
                        condition("below limit", |ctx: &Counter| ctx.value < ctx.limit),
                        action("increment", |ctx: &mut Counter| {
                            ctx.value += 1;
                            Status::Running
                        }),
                    ],
                )
                .unwrap(),
                action("reset", |ctx: &mut Counter| {
                    ctx.value = 0;
                    Status::Success
                }),
            ],
        )
        .unwrap();
        BehaviorTree::new(root)
    }

    #[test]
    fn run_reevaluates_from_root_each_call() {
        let tree = counting_tree();
        let mut ctx = Counter { value: 0, limit: 2 };

        assert_eq!(tree.run(&mut ctx), Status::Running);
        assert_eq!(tree.run(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 2);

        // Condition now fails, so the selector falls through to the reset branch
        assert_eq!(tree.run(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn depth_counts_levels() {
        let tree = counting_tree();
        assert_eq!(tree.root().depth(), 3);
        assert_eq!(tree.root().kind(), "Selector");
        assert_eq!(tree.root().children().len(), 2);
    }
}
