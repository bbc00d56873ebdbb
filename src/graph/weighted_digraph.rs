use super::*;

/// A directed multigraph stored as plain edge list.
///
/// Self-loops and parallel edges are kept as given; algorithms operating on the graph decide
/// how to treat them. The edge order is preserved, which makes tie-breaking of all algorithms
/// deterministic for a fixed input.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedDigraph<W> {
    number_of_nodes: NumNodes,
    edges: Vec<WeightedEdge<W>>,
}

impl<W> Default for WeightedDigraph<W> {
    fn default() -> Self {
        Self {
            number_of_nodes: 0,
            edges: Vec::new(),
        }
    }
}

impl<W: Weight> WeightedDigraph<W> {
    /// Creates a graph with `n` nodes and the given edges.
    /// ** Panics in debug builds if an endpoint is not below `n` **
    pub fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<W>>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge<W>> {
        self.edges
    }

    /// Returns the sum of all edge weights (including self-loops)
    pub fn total_weight(&self) -> W {
        let mut sum = W::zero();
        for e in &self.edges {
            sum += e.weight();
        }
        sum
    }
}

impl<W> GraphNodeOrder for WeightedDigraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<W> GraphEdgeOrder for WeightedDigraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W> GraphNew for WeightedDigraph<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            edges: Vec::new(),
        }
    }
}

impl<W: Weight> GraphEdgeEditing for WeightedDigraph<W> {
    type EdgeWeight = W;

    fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        debug_assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        self.edges.push(WeightedEdge(u, v, weight));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn construction() {
        let graph = WeightedDigraph::<u32>::from_edges(4, [(0, 1, 1), (1, 2, 3), (2, 2, 5)]);
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.total_weight(), 9);
        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(
            graph.into_edges(),
            vec![
                WeightedEdge(0, 1, 1),
                WeightedEdge(1, 2, 3),
                WeightedEdge(2, 2, 5)
            ]
        );
    }

    #[test]
    fn default_is_empty() {
        let graph = WeightedDigraph::<f64>::default();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
    }
}
