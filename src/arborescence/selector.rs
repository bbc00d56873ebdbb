use crate::{graph::*, utils::FlagMarker};

/// The cheapest edge entering a node, given by its source and weight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedEdge<W> {
    pub source: Node,
    pub weight: W,
}

/// For each node the cheapest non-loop edge entering it, if any.
///
/// The root never has a selected edge. Read as functional graph in which each node points to
/// its predecessor, the selection contains no cycle iff it is an arborescence.
#[derive(Clone, Debug)]
pub struct Selection<W> {
    incoming: Vec<Option<SelectedEdge<W>>>,
}

impl<W: Weight> Selection<W> {
    pub fn number_of_nodes(&self) -> NumNodes {
        self.incoming.len() as NumNodes
    }

    pub fn incoming_of(&self, v: Node) -> Option<SelectedEdge<W>> {
        self.incoming[v as usize]
    }

    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.incoming[v as usize].map(|e| e.source)
    }

    pub fn weight_of(&self, v: Node) -> Option<W> {
        self.incoming[v as usize].map(|e| e.weight)
    }

    /// Sums the weights of all selected edges
    pub fn total_weight(&self) -> W {
        let mut sum = W::zero();
        for sel in self.incoming.iter().flatten() {
            sum += sel.weight;
        }
        sum
    }

    /// Sums the weights of the edges selected for `nodes`
    pub fn weight_of_nodes(&self, nodes: &[Node]) -> W {
        let mut sum = W::zero();
        for &u in nodes {
            if let Some(w) = self.weight_of(u) {
                sum += w;
            }
        }
        sum
    }
}

/// Selects for every node `v != root` that is not `absorbed` the cheapest edge `(u, v)` with
/// `u != v`. Among edges of equal weight the first one in edge order is kept.
///
/// Returns the first node (in id order) without any candidate as error; in this case no
/// arborescence rooted at `root` exists.
pub fn select_min_incoming_edges<W: Weight>(
    graph: &WeightedDigraph<W>,
    root: Node,
    absorbed: &FlagMarker,
) -> Result<Selection<W>, Node> {
    debug_assert!(absorbed.len() >= graph.number_of_nodes());

    let mut incoming: Vec<Option<SelectedEdge<W>>> = vec![None; graph.len()];

    for &WeightedEdge(u, v, w) in graph.edges() {
        if u == v || v == root {
            continue;
        }

        let slot = &mut incoming[v as usize];
        if slot.is_none_or(|sel| w < sel.weight) {
            *slot = Some(SelectedEdge { source: u, weight: w });
        }
    }

    if let Some(v) = graph
        .vertices()
        .find(|&v| v != root && !absorbed.is_marked(v) && incoming[v as usize].is_none())
    {
        return Err(v);
    }

    Ok(Selection { incoming })
}
