use super::selector::Selection;
use crate::{graph::*, utils::NodeMarker};

/// Nodes of a directed cycle of a [`Selection`]. Each node's selected predecessor is the next
/// node in the sequence, the predecessor of the last node is the first one.
pub type Cycle = Vec<Node>;

/// Returns a cycle of the functional graph `v -> selection.predecessor_of(v)`, if there is any.
pub fn find_cycle<W: Weight>(selection: &Selection<W>) -> Option<Cycle> {
    CycleSearch::new(selection).next()
}

/// Returns all cycles of the functional graph `v -> selection.predecessor_of(v)`.
/// As every node has at most one predecessor, the cycles are pairwise node-disjoint.
pub fn find_all_cycles<W: Weight>(selection: &Selection<W>) -> Vec<Cycle> {
    CycleSearch::new(selection).collect()
}

/// Walks along the predecessor pointers of each yet unvisited node. Every node visited by the walk
/// started at `s` is marked with `s`; a walk stops at the first node without predecessor or
/// the first node that is already marked. If this node carries the mark of the current walk,
/// we closed a cycle. Each node is visited at most once, so exhausting the iterator takes linear
/// time.
struct CycleSearch<'a, W> {
    selection: &'a Selection<W>,
    walk: NodeMarker,
    path: Vec<Node>,
    next_start: Node,
}

impl<'a, W: Weight> CycleSearch<'a, W> {
    fn new(selection: &'a Selection<W>) -> Self {
        Self {
            selection,
            walk: NodeMarker::new(selection.number_of_nodes(), Node::MAX),
            path: Vec::new(),
            next_start: 0,
        }
    }

    fn walk_from(&mut self, start: Node) -> Option<Cycle> {
        self.path.clear();

        let mut current = start;
        loop {
            if self.walk.is_marked_with(current, &start) {
                // the closing node is on the path, so `position` always succeeds
                let first = self.path.iter().position(|&u| u == current)?;
                return Some(self.path[first..].to_vec());
            }

            if self.walk.is_marked(current) {
                return None;
            }

            self.walk.mark_with(current, start);
            self.path.push(current);

            current = self.selection.predecessor_of(current)?;
        }
    }
}

impl<W: Weight> Iterator for CycleSearch<'_, W> {
    type Item = Cycle;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_start < self.selection.number_of_nodes() {
            let start = self.next_start;
            self.next_start += 1;

            if self.walk.is_marked(start) || self.selection.predecessor_of(start).is_none() {
                continue;
            }

            if let Some(cycle) = self.walk_from(start) {
                return Some(cycle);
            }
        }

        None
    }
}
