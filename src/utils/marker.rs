use crate::graph::{Node, NumNodes};

/// Assigns a mark of type `T` to every node; nodes carrying `default` count as unmarked
#[derive(Clone, Debug, Default)]
pub struct Marker<T: Clone + Eq> {
    data: Vec<T>,
    default: T,
}

pub type NodeMarker = Marker<Node>;
pub type FlagMarker = Marker<bool>;

impl<T: Clone + Eq> Marker<T> {
    #[inline(always)]
    pub fn new(n: NumNodes, default: T) -> Self {
        Marker {
            data: vec![default.clone(); n as usize],
            default,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> NumNodes {
        self.data.len() as NumNodes
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends unmarked entries until the marker covers `n` nodes
    #[inline(always)]
    pub fn grow_to(&mut self, n: NumNodes) {
        debug_assert!(n >= self.len());
        self.data.resize(n as usize, self.default.clone());
    }

    #[inline(always)]
    pub fn get_mark(&self, index: Node) -> T {
        self.data[index as usize].clone()
    }

    #[inline(always)]
    pub fn is_marked(&self, index: Node) -> bool {
        self.data[index as usize] != self.default
    }

    #[inline(always)]
    pub fn is_marked_with(&self, index: Node, marker: &T) -> bool {
        self.data[index as usize] == *marker
    }

    #[inline(always)]
    pub fn mark_with(&mut self, index: Node, marker: T) {
        self.data[index as usize] = marker;
    }

    #[inline(always)]
    pub fn mark_all_with<I: IntoIterator<Item = Node>>(&mut self, indices: I, marker: T) {
        for i in indices {
            self.mark_with(i, marker.clone());
        }
    }

    /// Returns the number of marked entries
    pub fn number_of_marked(&self) -> NumNodes {
        self.data.iter().filter(|&x| *x != self.default).count() as NumNodes
    }
}
