use thiserror::Error;

use crate::element::NodeId;

/// Errors raised by document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not belong to this document")]
    UnknownNode(NodeId),

    #[error("node {0} is not a select control")]
    NotASelect(NodeId),

    #[error("node {0} is not an option entry")]
    NotAnOption(NodeId),

    #[error("node {0} has no parent to insert after")]
    Detached(NodeId),
}
