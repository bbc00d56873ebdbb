use super::{cycle::Cycle, selector::Selection};
use crate::{graph::*, utils::NodeMarker};

/// Result of contracting one or more cycles
#[derive(Clone, Debug)]
pub struct Contraction<W> {
    /// The contracted graph; it has one node more per contracted cycle. Nodes of contracted
    /// cycles keep their ids but are no longer incident to any edge.
    pub graph: WeightedDigraph<W>,

    /// The root of the contracted graph
    pub root: Node,

    /// Sum of the selected edge weights of all nodes in the contracted cycles
    pub cycle_weight: W,

    /// The `i`-th super node represents the `i`-th contracted cycle
    pub super_nodes: Vec<Node>,
}

/// Contracts `cycle` into the super node `graph.number_of_nodes()`.
/// See [`contract_cycles`] for the reweighting rules.
pub fn contract_cycle<W: Weight>(
    graph: WeightedDigraph<W>,
    root: Node,
    selection: &Selection<W>,
    cycle: &Cycle,
) -> Contraction<W> {
    contract_cycles(graph, root, selection, std::slice::from_ref(cycle))
}

/// Contracts each of the node-disjoint `cycles` into a new super node; the `i`-th cycle becomes
/// node `graph.number_of_nodes() + i`. Every edge `(u, v, w)` is rewritten as follows:
///  - neither endpoint in a cycle: copied unchanged,
///  - `v` in a cycle: redirected into the super node of `v` with weight `w - sel(v)` where
///    `sel(v)` is the weight selected for `v`,
///  - `u` in a cycle: redirected out of the super node of `u` with weight `w`,
///  - both endpoints in the same cycle: dropped.
///
/// If the root is part of a cycle, its super node becomes the new root.
pub fn contract_cycles<W: Weight>(
    graph: WeightedDigraph<W>,
    root: Node,
    selection: &Selection<W>,
    cycles: &[Cycle],
) -> Contraction<W> {
    let n = graph.number_of_nodes();
    let new_n = n + cycles.len() as NumNodes;

    let mut super_node_of = NodeMarker::new(n, Node::MAX);
    let mut cycle_weight = W::zero();
    let mut super_nodes = Vec::with_capacity(cycles.len());

    for (i, cycle) in cycles.iter().enumerate() {
        debug_assert!(cycle.len() >= 2);
        let super_node = n + i as NumNodes;
        super_node_of.mark_all_with(cycle.iter().copied(), super_node);
        cycle_weight += selection.weight_of_nodes(cycle);
        super_nodes.push(super_node);
    }

    let mut contracted = WeightedDigraph::new(new_n);
    for WeightedEdge(u, v, w) in graph.into_edges() {
        match (super_node_of.is_marked(u), super_node_of.is_marked(v)) {
            (false, false) => contracted.add_edge(u, v, w),
            (false, true) => {
                contracted.add_edge(u, super_node_of.get_mark(v), reduced(selection, v, w));
            }
            (true, false) => contracted.add_edge(super_node_of.get_mark(u), v, w),
            (true, true) => {
                let (su, sv) = (super_node_of.get_mark(u), super_node_of.get_mark(v));
                if su != sv {
                    contracted.add_edge(su, sv, reduced(selection, v, w));
                }
            }
        }
    }

    let root = if super_node_of.is_marked(root) {
        super_node_of.get_mark(root)
    } else {
        root
    };

    Contraction {
        graph: contracted,
        root,
        cycle_weight,
        super_nodes,
    }
}

fn reduced<W: Weight>(selection: &Selection<W>, v: Node, w: W) -> W {
    match selection.weight_of(v) {
        Some(sel) => w.reduced_by(sel),
        None => w,
    }
}
