use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::GraphError;
use crate::label::Label;

/// A labeled node.
///
/// Identity, equality, and hashing all derive from the label alone, so a node
/// and its raw label are interchangeable as map keys. The child pointers
/// exist for use inside a [`Tree`](crate::Tree) and never affect identity;
/// they refer to other nodes by label because the tree owns every node it
/// contains.
#[derive(Debug, Clone)]
pub struct Node {
    label: Label,
    pub(crate) left_child: Option<Label>,
    pub(crate) right_child: Option<Label>,
}

impl Node {
    pub fn new(label: impl Into<Label>) -> Node {
        Node {
            label: label.into(),
            left_child: None,
            right_child: None,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn left_child(&self) -> Option<&Label> {
        self.left_child.as_ref()
    }

    pub fn right_child(&self) -> Option<&Label> {
        self.right_child.as_ref()
    }

    /// Checked ordering against another node.
    ///
    /// Fails with `TypeMismatch` when the label kinds differ; equality stays
    /// tolerant (nodes of different kinds are unequal, not an error).
    pub fn try_cmp(&self, other: &Node) -> Result<Ordering, GraphError> {
        self.label.try_cmp(&other.label)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}

impl PartialEq<Label> for Node {
    fn eq(&self, other: &Label) -> bool {
        &self.label == other
    }
}

impl PartialEq<Node> for Label {
    fn eq(&self, other: &Node) -> bool {
        self == &other.label
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl From<Node> for Label {
    fn from(node: Node) -> Label {
        node.label
    }
}

impl From<&Node> for Label {
    fn from(node: &Node) -> Label {
        node.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::label::label;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_node_has_no_children() {
        let node = Node::new("foo");
        assert_eq!(node.label(), &label("foo"));
        assert_eq!(node.left_child(), None);
        assert_eq!(node.right_child(), None);
    }

    #[test]
    fn equality_follows_the_label() {
        assert_eq!(Node::new("foo"), Node::new("foo"));
        assert_ne!(Node::new("foo"), Node::new("bar"));
    }

    #[test]
    fn node_and_label_are_interchangeable() {
        let node = Node::new("foo");
        assert_eq!(node, label("foo"));
        assert_eq!(label("foo"), node);
        assert_eq!(hash_of(&node), hash_of(&label("foo")));
    }

    #[test]
    fn equality_across_kinds_is_false_but_ordering_is_an_error() {
        let text = Node::new("1");
        let int = Node::new(1);
        assert_ne!(text, int);
        assert!(text.try_cmp(&int).is_err());
    }

    #[test]
    fn ordering_delegates_to_the_label() {
        assert_eq!(
            Node::new("a").try_cmp(&Node::new("b")),
            Ok(Ordering::Less)
        );
    }
}
