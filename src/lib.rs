pub use error::GraphError;
pub use graph::Graph;
pub use label::{label, Label, LabelKind};
pub use node::Node;
pub use search::{
    breadth_first_search, depth_first_search, recursive_breadth_first_search,
    recursive_depth_first_search, OrderedAdjacency,
};
pub use tree::Tree;

mod error;
mod graph;
mod label;
mod node;
mod search;
mod tree;
