pub mod edge;
pub mod gnp;
pub mod relabel;
pub mod weight;
pub mod weighted_digraph;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

use std::ops::Range;

pub use edge::*;
pub use gnp::*;
pub use relabel::*;
pub use weight::*;
pub use weighted_digraph::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V. In contrast to an iterator borrowing the graph, the range
    /// may be used where additional mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    type EdgeWeight: Weight;

    /// Adds the directed edge *(u,v)* to the graph. I.e., the edge FROM u TO v.
    /// Parallel edges and self-loops are accepted.
    /// ** Can panic if u, v >= n, depending on implementation **
    fn add_edge(&mut self, u: Node, v: Node, weight: Self::EdgeWeight);

    fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::EdgeWeight>>>,
    ) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v, w);
        }
    }
}
