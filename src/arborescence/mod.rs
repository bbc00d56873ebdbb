//! Minimum-weight arborescences via the Chu-Liu/Edmonds reduction.
//!
//! The reduction is split into its building blocks: [`selector`] picks the cheapest incoming
//! edge of every node, [`cycle`] searches the resulting functional graph for cycles,
//! [`contraction`] collapses cycles into super nodes, and [`solver`] drives these steps until
//! the selection is acyclic. [`naive`] contains a brute-force reference for tiny graphs.

pub mod contraction;
pub mod cycle;
pub mod naive;
pub mod selector;
pub mod solver;

pub use solver::{ChuLiuEdmonds, ContractionStrategy, Outcome};

use crate::{errors::Infeasible, graph::*};

/// Returned by [`compute_min_arborescence_weight`] if no arborescence exists
pub const NO_ARBORESCENCE: i64 = -1;

/// Computes the weight of a minimum arborescence of the graph with nodes `1..=vertex_count`
/// rooted at `root`. Edges are `(source, target, weight)` triples with 1-based endpoints and
/// non-negative weights. Returns [`NO_ARBORESCENCE`] if some node cannot be reached from `root`.
///
/// # Example
/// ```
/// use mwa::arborescence::{NO_ARBORESCENCE, compute_min_arborescence_weight};
///
/// let edges = [(1, 2, 1), (1, 3, 5), (2, 3, 1), (2, 4, 2), (3, 4, 1)];
/// assert_eq!(compute_min_arborescence_weight(4, &edges, 1), 3);
///
/// assert_eq!(compute_min_arborescence_weight(2, &[(2, 1, 5)], 1), NO_ARBORESCENCE);
/// ```
pub fn compute_min_arborescence_weight(
    vertex_count: NumNodes,
    edges: &[(Node, Node, i64)],
    root: Node,
) -> i64 {
    debug_assert!((1..=vertex_count).contains(&root));

    let graph = WeightedDigraph::<i64>::from_edges(
        vertex_count,
        edges.iter().map(|&(u, v, w)| WeightedEdge(u - 1, v - 1, w)),
    );

    min_arborescence_weight(&graph, root - 1).unwrap_or(NO_ARBORESCENCE)
}

/// Computes the weight of a minimum arborescence of `graph` rooted at `root` (0-based), or
/// reports the node that cannot be entered.
pub fn min_arborescence_weight<W: Weight>(
    graph: &WeightedDigraph<W>,
    root: Node,
) -> Result<W, Infeasible> {
    min_arborescence_weight_with(graph, root, ContractionStrategy::default())
}

/// Same as [`min_arborescence_weight`] with an explicit [`ContractionStrategy`]
pub fn min_arborescence_weight_with<W: Weight>(
    graph: &WeightedDigraph<W>,
    root: Node,
    strategy: ContractionStrategy,
) -> Result<W, Infeasible> {
    ChuLiuEdmonds::new(graph.clone(), root)
        .with_strategy(strategy)
        .solve()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng, distributions::Uniform};
    use rand_pcg::Pcg64;

    #[test]
    fn chain_with_shortcuts() {
        let edges = [(1, 2, 1), (1, 3, 5), (2, 3, 1), (2, 4, 2), (3, 4, 1)];
        assert_eq!(compute_min_arborescence_weight(4, &edges, 1), 3);
    }

    #[test]
    fn missing_incoming_edge() {
        assert_eq!(
            compute_min_arborescence_weight(2, &[(2, 1, 5)], 1),
            NO_ARBORESCENCE
        );
    }

    #[test]
    fn isolated_node() {
        let edges = [(1, 2, 3), (2, 3, 4), (3, 2, 1)];
        assert_eq!(
            compute_min_arborescence_weight(4, &edges, 1),
            NO_ARBORESCENCE
        );
    }

    #[test]
    fn three_cycle_fed_by_root() {
        // root -> A, A -> B -> C -> A; the selection {A <- C, B <- A, C <- B} is a cycle
        let edges = [(1, 2, 10), (2, 3, 1), (3, 4, 2), (4, 2, 3), (1, 3, 20)];
        let weight = compute_min_arborescence_weight(4, &edges, 1);
        assert_eq!(weight, 13);

        let graph = WeightedDigraph::<i64>::from_edges(
            4,
            edges.iter().map(|&(u, v, w)| WeightedEdge(u - 1, v - 1, w)),
        );
        assert_eq!(naive::naive_min_arborescence_weight(&graph, 0), Some(13));
    }

    #[test]
    fn root_may_be_any_node() {
        let edges = [(3, 1, 2), (1, 2, 2), (3, 2, 5), (2, 3, 1)];
        assert_eq!(compute_min_arborescence_weight(3, &edges, 3), 4);
        assert_eq!(compute_min_arborescence_weight(3, &edges, 1), 3);
    }

    #[test]
    fn idempotent() {
        let mut rng = Pcg64::seed_from_u64(17);
        let weights = Uniform::new_inclusive(0i64, 50);
        for _ in 0..20 {
            let graph = WeightedDigraph::<i64>::random_gnm(&mut rng, 30, 120, &weights);
            let first = min_arborescence_weight(&graph, 0);
            let second = min_arborescence_weight(&graph, 0);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn self_loops_do_not_matter() {
        let mut rng = Pcg64::seed_from_u64(18);
        let weights = Uniform::new_inclusive(0u64, 50);
        for _ in 0..50 {
            let n = rng.gen_range(1..20);
            let m = 3 * n as NumEdges;
            let graph = WeightedDigraph::<u64>::random_feasible(&mut rng, n, m, 0, &weights);
            let expected = min_arborescence_weight(&graph, 0);

            let mut with_loops = graph.clone();
            for _ in 0..5 {
                let u = rng.gen_range(0..n);
                with_loops.add_edge(u, u, 0);
            }
            assert_eq!(min_arborescence_weight(&with_loops, 0), expected);
        }
    }

    #[test]
    fn parallel_edges_are_monotone() {
        let mut rng = Pcg64::seed_from_u64(19);
        let weights = Uniform::new_inclusive(1u64, 50);
        for _ in 0..50 {
            let n = rng.gen_range(2..20);
            let m = 3 * n as NumEdges;
            let graph = WeightedDigraph::<u64>::random_feasible(&mut rng, n, m, 0, &weights);
            let expected = min_arborescence_weight(&graph, 0).unwrap();

            let index = rng.gen_range(0..graph.edges().len());
            let WeightedEdge(u, v, w) = graph.edges()[index];

            let mut heavier = graph.clone();
            heavier.add_edge(u, v, w + 1);
            assert_eq!(min_arborescence_weight(&heavier, 0), Ok(expected));

            let mut lighter = graph.clone();
            lighter.add_edge(u, v, w - 1);
            assert!(min_arborescence_weight(&lighter, 0).unwrap() <= expected);
        }
    }

    #[test]
    fn invariant_under_relabeling() {
        let mut rng = Pcg64::seed_from_u64(20);
        let weights = Uniform::new_inclusive(0u64, 30);
        for _ in 0..100 {
            let n = rng.gen_range(1..40);
            let root = rng.gen_range(0..n);
            let m = 4 * n as NumEdges;
            let graph = WeightedDigraph::<u64>::random_gnm(&mut rng, n, m, &weights);
            let expected = min_arborescence_weight(&graph, root).ok();

            let mapper = NodeMapper::random(&mut rng, n);
            let relabeled = mapper.relabel(&graph);
            assert_eq!(
                min_arborescence_weight(&relabeled, mapper.new_id_of(root)).ok(),
                expected
            );
        }
    }

    #[test]
    fn not_worse_than_any_spanning_tree() {
        let mut rng = Pcg64::seed_from_u64(21);
        let weights = Uniform::new_inclusive(0u64, 100);
        for _ in 0..100 {
            let n = rng.gen_range(1..50);
            let tree = WeightedDigraph::<u64>::random_feasible(&mut rng, n, 0, 0, &weights);
            let m = 3 * n as NumEdges;
            let extra = WeightedDigraph::<u64>::random_gnm(&mut rng, n, m, &weights);

            let mut graph = tree.clone();
            graph.add_edges(extra.edges());

            let weight = min_arborescence_weight(&graph, 0).unwrap();
            assert!(weight <= tree.total_weight());
        }
    }

    #[test]
    fn float_weights() {
        let graph = WeightedDigraph::<f64>::from_edges(
            4,
            [(0, 1, 0.5), (1, 2, 0.25), (2, 3, 0.125), (3, 1, 0.125), (0, 2, 1.0)],
        );
        assert_eq!(min_arborescence_weight(&graph, 0), Ok(0.875));
        assert_matches_naive(&graph, 0);
    }
}
