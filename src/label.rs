use std::cmp::Ordering;
use std::fmt;

use crate::error::GraphError;

/// The value identifying a node.
///
/// Labels of different kinds never compare equal, but ordering them against
/// each other is an error rather than an arbitrary answer: equality is
/// tolerant, ordering is strict. Use [`Label::try_cmp`] wherever the order of
/// two labels carries meaning.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum Label {
    Text(String),
    Int(i64),
}

/// The kind of value a label holds, for error reporting.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LabelKind {
    Text,
    Int,
}

pub fn label(value: impl Into<Label>) -> Label {
    value.into()
}

impl Label {
    pub fn kind(&self) -> LabelKind {
        match self {
            Label::Text(_) => LabelKind::Text,
            Label::Int(_) => LabelKind::Int,
        }
    }

    /// Compares two labels of the same kind.
    ///
    /// The derived `Ord` on `Label` orders across kinds so that containers
    /// have a deterministic order to keep; this is the checked comparison
    /// that refuses to do so.
    pub fn try_cmp(&self, other: &Label) -> Result<Ordering, GraphError> {
        match (self, other) {
            (Label::Text(a), Label::Text(b)) => Ok(a.cmp(b)),
            (Label::Int(a), Label::Int(b)) => Ok(a.cmp(b)),
            _ => Err(GraphError::TypeMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<char> for Label {
    fn from(value: char) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Text(value) => write!(f, "{}", value),
            Label::Int(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LabelKind::Text => write!(f, "text"),
            LabelKind::Int => write!(f, "int"),
        }
    }
}
