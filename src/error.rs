use thiserror::Error;

use crate::label::{Label, LabelKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node labels must be unique: {label}")]
    DuplicateNode { label: Label },

    #[error("Node not found: {label}")]
    NodeNotFound { label: Label },

    #[error("Cannot order a {left} label against a {right} label")]
    TypeMismatch { left: LabelKind, right: LabelKind },

    #[error("Only a node without child pointers can be inserted")]
    InvalidNodeType,

    #[error("Cannot search an empty structure")]
    EmptyStructure,
}
