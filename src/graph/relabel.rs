use rand::{Rng, seq::SliceRandom};

use super::*;

/// A bijection on `[0, n)` used to rename the nodes of a graph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeMapper {
    new_ids: Vec<Node>,
}

impl NodeMapper {
    /// Draws a permutation uniformly at random
    pub fn random<R: Rng>(rng: &mut R, n: NumNodes) -> Self {
        let mut new_ids: Vec<Node> = (0..n).collect();
        new_ids.shuffle(rng);
        Self { new_ids }
    }

    pub fn len(&self) -> NumNodes {
        self.new_ids.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.new_ids.is_empty()
    }

    pub fn new_id_of(&self, u: Node) -> Node {
        self.new_ids[u as usize]
    }

    /// Returns a copy of `graph` in which node `u` is renamed to `self.new_id_of(u)`.
    /// The edge order is preserved.
    pub fn relabel<W: Weight>(&self, graph: &WeightedDigraph<W>) -> WeightedDigraph<W> {
        debug_assert_eq!(self.len(), graph.number_of_nodes());
        WeightedDigraph::from_edges(
            graph.number_of_nodes(),
            graph
                .edges()
                .iter()
                .map(|&WeightedEdge(u, v, w)| WeightedEdge(self.new_id_of(u), self.new_id_of(v), w)),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;

    #[test]
    fn random_is_permutation() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for n in 0..50 {
            let mapper = NodeMapper::random(&mut rng, n);
            assert_eq!(mapper.len(), n);
            let images = (0..n).map(|u| mapper.new_id_of(u)).sorted().collect_vec();
            assert_eq!(images, (0..n).collect_vec());
        }
    }

    #[test]
    fn relabel_edges() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(5);
        let graph = WeightedDigraph::<u32>::from_edges(3, [(0, 1, 4), (1, 2, 5), (2, 2, 6)]);

        let mapper = NodeMapper::random(&mut rng, 3);
        let relabeled = mapper.relabel(&graph);
        assert_eq!(relabeled.number_of_nodes(), 3);
        assert_eq!(
            relabeled.edges(),
            graph
                .edges()
                .iter()
                .map(|&WeightedEdge(u, v, w)| WeightedEdge(
                    mapper.new_id_of(u),
                    mapper.new_id_of(v),
                    w
                ))
                .collect_vec()
        );
        assert!(relabeled.edges()[2].is_loop());
    }
}
