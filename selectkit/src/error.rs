use formdom::{DomError, NodeId};
use thiserror::Error;

/// Errors from constructing or driving a [`SelectWidget`](crate::SelectWidget).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("select control {0} has no options")]
    NoOptions(NodeId),

    #[error("option {0} does not belong to this select")]
    UnknownOption(NodeId),

    #[error("option index {index} out of range ({len} options)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no option with value {0:?}")]
    UnknownValue(String),

    #[error(transparent)]
    Dom(#[from] DomError),
}
