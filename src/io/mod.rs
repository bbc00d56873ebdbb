//! Instances are stored in a line-based text format in the spirit of the PACE `.gr` files:
//!
//! ```text
//! c comment lines start with 'c'
//! p mwa <number of nodes> <number of edges> [<root>]
//! <source> <target> <weight>
//! ...
//! ```
//!
//! Nodes are numbered from 1 in the file and from 0 in memory. If the header omits the root,
//! node 1 is the root.

pub mod dot_writer;
pub mod mwa_reader;
pub mod mwa_writer;

pub use dot_writer::DotWriter;
pub use mwa_reader::{MwaEdgeReader, MwaReader};
pub use mwa_writer::MwaWriter;

use crate::{
    errors::{InputError, InvariantCheck},
    graph::*,
};

/// A graph together with the root of the arborescence sought
#[derive(Clone, Debug, PartialEq)]
pub struct MwaInstance<W> {
    pub graph: WeightedDigraph<W>,
    pub root: Node,
}

impl<W: Weight> MwaInstance<W> {
    pub fn new(graph: WeightedDigraph<W>, root: Node) -> Self {
        Self { graph, root }
    }
}

impl<W: Weight> InvariantCheck<InputError> for MwaInstance<W> {
    fn is_correct(&self) -> Result<(), InputError> {
        let n = self.graph.number_of_nodes();
        if n == 0 {
            return Err(InputError::NoNodes);
        }

        if self.root >= n {
            return Err(InputError::RootOutOfRange {
                root: self.root + 1,
                number_of_nodes: n,
            });
        }

        for (index, edge) in self.graph.edges().iter().enumerate() {
            if let Some(node) = [edge.source(), edge.target()].into_iter().find(|&u| u >= n) {
                return Err(InputError::NodeOutOfRange {
                    index,
                    node: node + 1,
                    number_of_nodes: n,
                });
            }

            if !edge.weight().is_admissible() {
                return Err(InputError::InadmissibleWeight {
                    index,
                    weight: edge.weight().to_string(),
                });
            }
        }

        Ok(())
    }
}
