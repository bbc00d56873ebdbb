use super::{
    arborescence::{
        ContractionStrategy, min_arborescence_weight_with, naive::naive_min_arborescence_weight,
    },
    graph::*,
};
use rand::{Rng, distributions::Uniform};

/// Draws a graph with at most `max_nodes` nodes that is small enough for the naive solver.
/// Roughly half of the instances are guaranteed to be feasible, a sixth are dense Gilbert
/// graphs; some contain self-loops and parallel edges.
pub fn random_small_instance(
    rng: &mut impl Rng,
    max_nodes: NumNodes,
) -> (WeightedDigraph<u64>, Node) {
    let n = rng.gen_range(1..=max_nodes);
    let root = rng.gen_range(0..n);
    let m = rng.gen_range(0..=2 * n as NumEdges);
    let weights = Uniform::new_inclusive(0u64, 9);

    let mut graph = match rng.gen_range(0..6) {
        0..3 => WeightedDigraph::<u64>::random_feasible(rng, n, m, root, &weights),
        3..5 => WeightedDigraph::<u64>::random_gnm(rng, n, m, &weights),
        _ => {
            let p = rng.gen_range(0.1..0.6);
            WeightedDigraph::<u64>::random_gnp(rng, n, p, &weights)
        }
    };

    if rng.gen_bool(0.2) {
        let u = rng.gen_range(0..n);
        graph.add_edge(u, u, rng.gen_range(0..3));
    }

    if rng.gen_bool(0.2) && graph.number_of_edges() > 0 {
        let WeightedEdge(u, v, w) = graph.edges()[rng.gen_range(0..graph.edges().len())];
        graph.add_edge(u, v, w / 2);
    }

    (graph, root)
}

/// Asserts that both contraction strategies agree with the brute-force solver
pub fn assert_matches_naive<W: Weight>(graph: &WeightedDigraph<W>, root: Node) {
    let naive = naive_min_arborescence_weight(graph, root);

    for strategy in [ContractionStrategy::Sequential, ContractionStrategy::Batch] {
        let result = min_arborescence_weight_with(graph, root, strategy).ok();
        assert_eq!(
            result, naive,
            "strategy: {strategy}, root: {root}, graph: {graph:?}"
        );
    }
}
