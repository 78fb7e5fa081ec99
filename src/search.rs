use std::collections::{HashSet, VecDeque};

use crate::error::GraphError;
use crate::label::Label;

/// Read access to a structure whose traversal order is well defined: a
/// deterministic starting node and neighbor lookups in ascending label
/// order. Both [`Graph`](crate::Graph) and [`Tree`](crate::Tree) expose it,
/// so every search function below works on either.
pub trait OrderedAdjacency {
    fn is_empty(&self) -> bool;

    /// The node a traversal starts from, or `None` when the structure is
    /// empty.
    fn start_node(&self) -> Option<&Label>;

    /// The neighbors of a node in ascending label order.
    fn neighbors(&self, label: &Label) -> Result<Vec<Label>, GraphError>;
}

fn start(structure: &impl OrderedAdjacency) -> Result<Label, GraphError> {
    structure
        .start_node()
        .cloned()
        .ok_or(GraphError::EmptyStructure)
}

/// Visits every node reachable from the start node, nearest first, and
/// returns them in discovery order.
pub fn breadth_first_search(
    structure: &impl OrderedAdjacency,
) -> Result<Vec<Label>, GraphError> {
    let mut discovered = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start(structure)?]);

    while let Some(label) = queue.pop_front() {
        // Duplicates are filtered when dequeued, not when enqueued.
        if seen.insert(label.clone()) {
            queue.extend(structure.neighbors(&label)?);
            discovered.push(label);
        }
    }
    Ok(discovered)
}

/// [`breadth_first_search`] restated with one recursive call per dequeue.
/// The output is identical.
pub fn recursive_breadth_first_search(
    structure: &impl OrderedAdjacency,
) -> Result<Vec<Label>, GraphError> {
    let mut discovered = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start(structure)?]);
    visit_queue(structure, &mut queue, &mut discovered, &mut seen)?;
    Ok(discovered)
}

fn visit_queue(
    structure: &impl OrderedAdjacency,
    queue: &mut VecDeque<Label>,
    discovered: &mut Vec<Label>,
    seen: &mut HashSet<Label>,
) -> Result<(), GraphError> {
    let Some(label) = queue.pop_front() else {
        return Ok(());
    };
    if seen.insert(label.clone()) {
        queue.extend(structure.neighbors(&label)?);
        discovered.push(label);
    }
    visit_queue(structure, queue, discovered, seen)
}

/// Visits every node reachable from the start node, following each branch as
/// far as it goes before backtracking, and returns them in discovery order.
pub fn depth_first_search(
    structure: &impl OrderedAdjacency,
) -> Result<Vec<Label>, GraphError> {
    let mut discovered = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![start(structure)?];

    while let Some(label) = stack.pop() {
        if seen.insert(label.clone()) {
            // Pushed in reverse so the next pop yields the least neighbor,
            // matching the recursive variant's visit order.
            for neighbor in structure.neighbors(&label)?.into_iter().rev() {
                stack.push(neighbor);
            }
            discovered.push(label);
        }
    }
    Ok(discovered)
}

/// [`depth_first_search`] as a classic pre-order recursion. The output is
/// identical.
pub fn recursive_depth_first_search(
    structure: &impl OrderedAdjacency,
) -> Result<Vec<Label>, GraphError> {
    let mut discovered = Vec::new();
    let mut seen = HashSet::new();
    visit_node(structure, start(structure)?, &mut discovered, &mut seen)?;
    Ok(discovered)
}

fn visit_node(
    structure: &impl OrderedAdjacency,
    label: Label,
    discovered: &mut Vec<Label>,
    seen: &mut HashSet<Label>,
) -> Result<(), GraphError> {
    if !seen.insert(label.clone()) {
        return Ok(());
    }
    let neighbors = structure.neighbors(&label)?;
    discovered.push(label);
    for neighbor in neighbors {
        visit_node(structure, neighbor, discovered, seen)?;
    }
    Ok(())
}
