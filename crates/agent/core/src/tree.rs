//! The agent's fixed decision tree.
//!
//! ```text
//! Selector "Chase or flee or wander"
//! ├── Sequence "Decision or wander"
//! │   ├── Condition "Is opponent nearby" (nearby_radius)
//! │   └── Selector "Chase or flee"
//! │       ├── Sequence "Chase": Condition "Score deficit", Action "Move to opponent"
//! │       └── Sequence "Flee":  Condition "Score surplus", Action "Run from opponent"
//! └── Sequence "Wander"
//!     ├── Action "Set random destination"
//!     └── Action "Move to destination" (arrival_radius)
//! ```
//!
//! Chase is listed before flee, so a tied score chases.

use behavior_tree::builder::{action, condition, selector, sequence};
use behavior_tree::{BehaviorTree, BuildError};

use crate::config::AgentConfig;
use crate::context::AgentContext;

/// Assembles the tree, binding radii from `config` into the leaves.
pub fn build_behavior_tree(config: &AgentConfig) -> Result<BehaviorTree<AgentContext>, BuildError> {
    let nearby_radius = config.nearby_radius;
    let arrival_radius = config.arrival_radius;

    let chase = sequence(
        "Chase",
        vec![
            condition("Score deficit", AgentContext::has_score_deficit),
            action("Move to opponent", move |ctx: &mut AgentContext| {
                ctx.move_to_opponent(arrival_radius)
            }),
        ],
    )?;

    let flee = sequence(
        "Flee",
        vec![
            condition("Score surplus", AgentContext::has_score_surplus),
            action("Run from opponent", AgentContext::run_from_opponent),
        ],
    )?;

    let chase_or_flee = selector("Chase or flee", vec![chase, flee])?;

    let decision = sequence(
        "Decision or wander",
        vec![
            condition("Is opponent nearby", move |ctx: &AgentContext| {
                ctx.is_opponent_nearby(nearby_radius)
            }),
            chase_or_flee,
        ],
    )?;

    let wander = sequence(
        "Wander",
        vec![
            action("Set random destination", AgentContext::set_random_destination),
            action("Move to destination", move |ctx: &mut AgentContext| {
                ctx.move_to_destination(arrival_radius)
            }),
        ],
    )?;

    let root = selector("Chase or flee or wander", vec![decision, wander])?;
    Ok(BehaviorTree::new(root))
}
