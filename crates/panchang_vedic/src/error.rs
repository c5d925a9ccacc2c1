//! Error types for name lookups.

/// Errors from the classifier crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A name did not match any member of the named table.
    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },
}
