use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::label::Label;
use crate::search::OrderedAdjacency;

/// An undirected graph of labeled nodes.
///
/// Two invariants hold at all times: adjacency is symmetric, and every label
/// appearing in a neighbor set is also a node of the graph. Iteration and
/// neighbor lookups are always in ascending label order regardless of
/// insertion order, so traversals over the graph are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Label, BTreeSet<Label>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Adds a node with no edges.
    pub fn add(&mut self, label: impl Into<Label>) -> Result<(), GraphError> {
        let label = label.into();
        if self.adjacency.contains_key(&label) {
            return Err(GraphError::DuplicateNode { label });
        }
        self.adjacency.insert(label, BTreeSet::new());
        Ok(())
    }

    /// Removes a node, stripping its back-reference from every neighbor
    /// first so no dangling edge survives.
    pub fn remove(&mut self, label: impl Into<Label>) -> Result<(), GraphError> {
        let label = label.into();
        let neighbors = match self.adjacency.get(&label) {
            Some(set) => set.clone(),
            None => return Err(GraphError::NodeNotFound { label }),
        };
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(&label);
            }
        }
        self.adjacency.remove(&label);
        Ok(())
    }

    /// Connects two nodes with an undirected edge. Connecting an already
    /// connected pair has no effect.
    pub fn connect(
        &mut self,
        first: impl Into<Label>,
        second: impl Into<Label>,
    ) -> Result<(), GraphError> {
        let first = first.into();
        let second = second.into();
        // Both endpoints are checked before either set is touched.
        if !self.adjacency.contains_key(&first) {
            return Err(GraphError::NodeNotFound { label: first });
        }
        if !self.adjacency.contains_key(&second) {
            return Err(GraphError::NodeNotFound { label: second });
        }
        if let Some(set) = self.adjacency.get_mut(&first) {
            set.insert(second.clone());
        }
        if let Some(set) = self.adjacency.get_mut(&second) {
            set.insert(first);
        }
        Ok(())
    }

    /// Removes the edge between two nodes. Pairs that are not adjacent, and
    /// nodes that are not in the graph, are ignored.
    pub fn disconnect(&mut self, first: impl Into<Label>, second: impl Into<Label>) {
        let first = first.into();
        let second = second.into();
        if let Some(set) = self.adjacency.get_mut(&first) {
            set.remove(&second);
        }
        if let Some(set) = self.adjacency.get_mut(&second) {
            set.remove(&first);
        }
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.adjacency.contains_key(label)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// The neighbors of a node in ascending label order.
    pub fn neighbors(&self, label: &Label) -> Result<Vec<Label>, GraphError> {
        match self.adjacency.get(label) {
            Some(set) => Ok(set.iter().cloned().collect()),
            None => Err(GraphError::NodeNotFound {
                label: label.clone(),
            }),
        }
    }

    /// Iterates the node labels in ascending order. Each call starts a fresh
    /// iterator.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.adjacency.keys()
    }
}

impl PartialEq<BTreeMap<Label, BTreeSet<Label>>> for Graph {
    fn eq(&self, other: &BTreeMap<Label, BTreeSet<Label>>) -> bool {
        &self.adjacency == other
    }
}

impl OrderedAdjacency for Graph {
    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn start_node(&self) -> Option<&Label> {
        self.adjacency.keys().next()
    }

    fn neighbors(&self, label: &Label) -> Result<Vec<Label>, GraphError> {
        Graph::neighbors(self, label)
    }
}
