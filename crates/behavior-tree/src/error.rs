//! Tree construction errors.

/// Rejected tree shapes, reported when the node is built rather than
/// discovered mid-tick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{kind} `{name}` must have at least one child")]
    EmptyComposite { kind: &'static str, name: String },
}
