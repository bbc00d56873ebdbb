use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// No arborescence exists since `node` cannot be entered by any edge.
///
/// Node ids refer to the graph of the reduction round `iteration` (starting at 1); in the first
/// round these are the ids of the input graph, later rounds may report a super node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no arborescence exists: node {node} has no incoming edge in round {iteration}")]
pub struct Infeasible {
    pub node: Node,
    pub iteration: usize,
}

/// Violations of the preconditions of the arborescence solvers. Nodes are reported 1-based,
/// as they appear in instance files.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("instance has no nodes")]
    NoNodes,

    #[error("root {root} is out of range [1, {number_of_nodes}]")]
    RootOutOfRange { root: Node, number_of_nodes: NumNodes },

    #[error("edge #{index} has endpoint {node} which is out of range [1, {number_of_nodes}]")]
    NodeOutOfRange {
        index: usize,
        node: Node,
        number_of_nodes: NumNodes,
    },

    #[error("edge #{index} has weight {weight}, but weights must be finite and non-negative")]
    InadmissibleWeight { index: usize, weight: String },
}
