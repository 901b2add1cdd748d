//! Leaf behavior nodes.
//!
//! Leaves wrap a callable owned by the tree. Any fixed argument (a radius, a
//! threshold) is captured by the closure when the node is built, so nothing
//! is rebuilt per tick.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Task<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;

/// Tests a predicate against the context.
///
/// The predicate returns `bool`, so a condition can only ever yield `Success`
/// or `Failure`. It receives a shared reference and cannot mutate the context.
pub struct Condition<C> {
    name: String,
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from((self.predicate)(ctx))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Runs a state-mutating task and returns whatever status it computes.
///
/// Actions may return `Running` for work spanning several ticks. Because the
/// tree keeps no cursor, such an action must be safe to re-enter.
pub struct Action<C> {
    name: String,
    task: Task<C>,
}

impl<C> Action<C> {
    pub fn new<F>(name: impl Into<String>, task: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            task: Box::new(task),
        }
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.task)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
