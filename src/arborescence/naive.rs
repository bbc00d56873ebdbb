use itertools::Itertools;

use crate::graph::*;

/// Computes the weight of a minimum arborescence rooted at `root` by enumerating all ways of
/// choosing one incoming edge per non-root node. Returns `None` if no arborescence exists.
///
/// The running time is the product of the in-degrees; only use it on tiny graphs.
pub fn naive_min_arborescence_weight<W: Weight>(
    graph: &WeightedDigraph<W>,
    root: Node,
) -> Option<W> {
    let n = graph.number_of_nodes();
    let non_roots = graph.vertices().filter(|&v| v != root).collect_vec();

    let mut candidates = vec![Vec::new(); graph.len()];
    for &edge in graph.edges() {
        if !edge.is_loop() && edge.target() != root {
            candidates[edge.target() as usize].push(edge);
        }
    }

    if non_roots.is_empty() {
        return Some(W::zero());
    }

    if non_roots.iter().any(|&v| candidates[v as usize].is_empty()) {
        return None;
    }

    let mut best: Option<W> = None;
    let mut parent = vec![None; n as usize];

    for choice in non_roots
        .iter()
        .map(|&v| candidates[v as usize].iter())
        .multi_cartesian_product()
    {
        let mut weight = W::zero();
        for edge in &choice {
            parent[edge.target() as usize] = Some(edge.source());
            weight += edge.weight();
        }

        if best.is_some_and(|b| b <= weight) || !reaches_root_from_all(&parent, root) {
            continue;
        }

        best = Some(weight);
    }

    best
}

/// Returns true if following `parent` pointers leads from every node to `root`
fn reaches_root_from_all(parent: &[Option<Node>], root: Node) -> bool {
    let n = parent.len();
    (0..n as Node).all(|start| {
        let mut current = start;
        // a path to the root visits at most n nodes; otherwise we are stuck in a cycle
        for _ in 0..n {
            if current == root {
                return true;
            }
            match parent[current as usize] {
                Some(p) => current = p,
                None => return false,
            }
        }
        current == root
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_graphs() {
        let graph = WeightedDigraph::<u32>::from_edges(
            4,
            [(0, 1, 1), (0, 2, 5), (1, 2, 1), (1, 3, 2), (2, 3, 1)],
        );
        assert_eq!(naive_min_arborescence_weight(&graph, 0), Some(3));

        let graph = WeightedDigraph::<u32>::from_edges(2, [(1, 0, 5)]);
        assert_eq!(naive_min_arborescence_weight(&graph, 0), None);

        let graph = WeightedDigraph::<u32>::new(1);
        assert_eq!(naive_min_arborescence_weight(&graph, 0), Some(0));
    }

    #[test]
    fn rejects_cyclic_choices() {
        // the cheapest choice 1 <-> 2 is not an arborescence
        let graph =
            WeightedDigraph::<u32>::from_edges(3, [(1, 2, 1), (2, 1, 1), (0, 1, 10), (0, 2, 20)]);
        assert_eq!(naive_min_arborescence_weight(&graph, 0), Some(11));

        let graph = WeightedDigraph::<u32>::from_edges(3, [(1, 2, 1), (2, 1, 1)]);
        assert_eq!(naive_min_arborescence_weight(&graph, 0), None);
    }
}
