//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::tree::NodePath;

/// Domain errors represent structural violations of the tree.
/// Rendering never produces one; only mutations do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cycle detected: cannot move {from} under its own descendant {to}")]
    CycleDetected { from: NodePath, to: NodePath },

    #[error("node is a leaf and cannot hold children: {0}")]
    NotAComposite(NodePath),

    #[error("node not found: {0}")]
    NodeNotFound(NodePath),

    #[error("the root node cannot be detached")]
    RootRemoval,

    #[error("invalid node path: {0}")]
    InvalidPath(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
