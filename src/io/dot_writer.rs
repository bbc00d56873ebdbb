use std::io::Write;

use super::super::graph::*;

/// produces a minimalistic DOT representation of the graph; edges are labelled with weights
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl<T> DotWriter for WeightedDigraph<T>
where
    T: Weight,
{
    fn try_write_dot<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        write!(writer, "digraph G {{")?;
        for WeightedEdge(u, v, w) in self.edges() {
            write!(writer, "v{u}->v{v}[label=\"{w}\"]; ")?;
        }
        write!(writer, r"}}")
    }
}
