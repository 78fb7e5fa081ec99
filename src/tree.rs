use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::label::Label;
use crate::node::Node;
use crate::search::OrderedAdjacency;

/// A binary search tree layered over an undirected graph.
///
/// The graph records each parent-child edge symmetrically and serves as the
/// adjacency ledger; the binary shape itself lives in the child pointers of
/// the nodes. The tree owns every node it contains, and child pointers refer
/// to them by label, so the shape can only ever be a tree.
#[derive(Debug, Default, Clone)]
pub struct Tree {
    graph: Graph,
    nodes: BTreeMap<Label, Node>,
    root: Option<Label>,
}

enum Side {
    Left,
    Right,
}

impl Tree {
    pub fn new() -> Tree {
        Tree {
            graph: Graph::new(),
            nodes: BTreeMap::new(),
            root: None,
        }
    }

    /// Creates a tree seeded with a root node.
    pub fn with_root(node: Node) -> Result<Tree, GraphError> {
        let mut tree = Tree::new();
        tree.insert(node)?;
        Ok(tree)
    }

    /// Inserts a node at the position its label determines.
    ///
    /// The first inserted node becomes the root. Every later node descends
    /// from the root, left on a lesser label and right on a greater one, and
    /// attaches as a leaf at the first empty child slot; the new parent-child
    /// edge is mirrored in the underlying graph.
    ///
    /// Fails with `InvalidNodeType` if the node already carries child
    /// pointers, with `DuplicateNode` if an equal label is already present,
    /// and with `TypeMismatch` if its label cannot be ordered against the
    /// labels in the tree. A failed insert leaves the tree untouched.
    pub fn insert(&mut self, node: Node) -> Result<(), GraphError> {
        if node.left_child.is_some() || node.right_child.is_some() {
            return Err(GraphError::InvalidNodeType);
        }

        let Some(root) = self.root.clone() else {
            self.graph.add(node.label().clone())?;
            self.root = Some(node.label().clone());
            self.nodes.insert(node.label().clone(), node);
            return Ok(());
        };

        // The full descent happens before any mutation, so every failure
        // leaves the tree as it was.
        let (parent, side) = self.find_slot(&root, node.label())?;

        let label = node.label().clone();
        self.graph.add(label.clone())?;
        self.graph.connect(parent.clone(), label.clone())?;
        self.nodes.insert(label.clone(), node);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            match side {
                Side::Left => parent_node.left_child = Some(label),
                Side::Right => parent_node.right_child = Some(label),
            }
        }
        Ok(())
    }

    /// Walks down from `root` comparing labels until an empty child slot is
    /// found, and returns the parent to attach under and the side to attach
    /// on.
    fn find_slot(&self, root: &Label, label: &Label) -> Result<(Label, Side), GraphError> {
        let mut current = root.clone();
        loop {
            let node = match self.nodes.get(&current) {
                Some(node) => node,
                None => return Err(GraphError::NodeNotFound { label: current }),
            };
            match label.try_cmp(node.label())? {
                Ordering::Equal => {
                    return Err(GraphError::DuplicateNode {
                        label: label.clone(),
                    })
                }
                Ordering::Less => match &node.left_child {
                    Some(next) => current = next.clone(),
                    None => return Ok((current, Side::Left)),
                },
                Ordering::Greater => match &node.right_child {
                    Some(next) => current = next.clone(),
                    None => return Ok((current, Side::Right)),
                },
            }
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().and_then(|label| self.nodes.get(label))
    }

    pub fn node(&self, label: &Label) -> Option<&Node> {
        self.nodes.get(label)
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.graph.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// The neighbors of a node in the underlying graph, in ascending label
    /// order: its parent and its children, undistinguished.
    pub fn neighbors(&self, label: &Label) -> Result<Vec<Label>, GraphError> {
        self.graph.neighbors(label)
    }

    /// Iterates the node labels in ascending order, like the underlying
    /// graph.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.graph.iter()
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Tree) -> bool {
        self.graph == other.graph
    }
}

impl Eq for Tree {}

impl PartialEq<Graph> for Tree {
    fn eq(&self, other: &Graph) -> bool {
        &self.graph == other
    }
}

impl PartialEq<BTreeMap<Label, BTreeSet<Label>>> for Tree {
    fn eq(&self, other: &BTreeMap<Label, BTreeSet<Label>>) -> bool {
        &self.graph == other
    }
}

impl OrderedAdjacency for Tree {
    fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Traversals over a tree start at its root, not at the least label.
    fn start_node(&self) -> Option<&Label> {
        self.root.as_ref()
    }

    fn neighbors(&self, label: &Label) -> Result<Vec<Label>, GraphError> {
        self.graph.neighbors(label)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::label::label;

    fn tree_of(labels: &str) -> Tree {
        let mut tree = Tree::new();
        for character in labels.chars() {
            tree.insert(Node::new(character)).unwrap();
        }
        tree
    }

    /// Checks the search-tree ordering invariant below `label`: everything
    /// reachable through the left child is lesser, everything through the
    /// right child is greater.
    fn assert_ordered(tree: &Tree, label: &Label) {
        let node = tree.node(label).unwrap();
        if let Some(left) = node.left_child() {
            for descendant in reachable(tree, left) {
                assert!(descendant < *label);
            }
            assert_ordered(tree, left);
        }
        if let Some(right) = node.right_child() {
            for descendant in reachable(tree, right) {
                assert!(descendant > *label);
            }
            assert_ordered(tree, right);
        }
    }

    fn reachable(tree: &Tree, label: &Label) -> Vec<Label> {
        let mut labels = vec![label.clone()];
        let node = tree.node(label).unwrap();
        if let Some(left) = node.left_child() {
            labels.extend(reachable(tree, left));
        }
        if let Some(right) = node.right_child() {
            labels.extend(reachable(tree, right));
        }
        labels
    }

    #[test]
    fn empty_tree() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree, Graph::new());
    }

    #[test]
    fn first_insert_becomes_the_root() {
        let tree = Tree::with_root(Node::new("e")).unwrap();
        assert_eq!(tree.root(), Some(&Node::new("e")));
        assert_eq!(tree.neighbors(&label("e")), Ok(vec![]));
    }

    #[test]
    fn insert_descends_by_label() {
        let tree = tree_of("ebgacfh");

        let root = tree.root().unwrap();
        assert_eq!(root.left_child(), Some(&label("b")));
        assert_eq!(root.right_child(), Some(&label("g")));

        let b = tree.node(&label("b")).unwrap();
        assert_eq!(b.left_child(), Some(&label("a")));
        assert_eq!(b.right_child(), Some(&label("c")));

        let g = tree.node(&label("g")).unwrap();
        assert_eq!(g.left_child(), Some(&label("f")));
        assert_eq!(g.right_child(), Some(&label("h")));
    }

    #[test]
    fn graph_adjacency_mirrors_the_shape() {
        let tree = tree_of("ebgacfh");

        assert_eq!(
            tree.neighbors(&label("e")),
            Ok(vec![label("b"), label("g")])
        );
        assert_eq!(
            tree.neighbors(&label("b")),
            Ok(vec![label("a"), label("c"), label("e")])
        );
        assert_eq!(tree.neighbors(&label("a")), Ok(vec![label("b")]));
    }

    #[test]
    fn ordering_invariant_holds_for_every_insertion_order() {
        for permutation in "abcdef".chars().permutations(6) {
            let mut tree = Tree::new();
            for character in &permutation {
                tree.insert(Node::new(*character)).unwrap();
            }

            let root = tree.root().unwrap().label().clone();
            assert_ordered(&tree, &root);

            let expected: Vec<Label> = "abcdef".chars().map(label).collect();
            let actual: Vec<Label> = tree.iter().cloned().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut tree = tree_of("eb");
        assert_eq!(
            tree.insert(Node::new("b")),
            Err(GraphError::DuplicateNode { label: label("b") })
        );
        assert_eq!(tree, tree_of("eb"));
    }

    #[test]
    fn insert_rejects_a_node_with_children() {
        let mut node = Node::new("x");
        node.left_child = Some(label("y"));

        let mut tree = Tree::new();
        assert_eq!(tree.insert(node), Err(GraphError::InvalidNodeType));
        assert!(tree.is_empty());
    }

    #[test]
    fn insert_rejects_an_unorderable_label() {
        let mut tree = tree_of("eb");
        assert!(matches!(
            tree.insert(Node::new(1)),
            Err(GraphError::TypeMismatch { .. })
        ));
        // The failed insert left the tree untouched.
        assert_eq!(tree, tree_of("eb"));
        assert!(!tree.contains(&label(1)));
    }

    #[test]
    fn equality_delegates_to_the_graph() {
        let mut graph = Graph::new();
        graph.add("e").unwrap();
        graph.add("b").unwrap();
        graph.connect("e", "b").unwrap();

        assert_eq!(tree_of("eb"), graph);
        assert_eq!(tree_of("eb"), tree_of("eb"));
        assert_ne!(tree_of("eb"), tree_of("e"));
    }
}
