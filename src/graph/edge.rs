use super::*;

pub trait EdgeOps {
    fn is_loop(&self) -> bool;
}

/// Directed edge FROM `self.0` TO `self.1` with weight `self.2`
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Hash)]
pub struct WeightedEdge<W>(pub Node, pub Node, pub W);

impl<W: Copy> WeightedEdge<W> {
    pub fn source(&self) -> Node {
        self.0
    }

    pub fn target(&self) -> Node {
        self.1
    }

    pub fn weight(&self) -> W {
        self.2
    }
}

impl<W: Copy> EdgeOps for WeightedEdge<W> {
    fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let edge: WeightedEdge<u32> = (3, 1, 7).into();
        assert_eq!(edge.source(), 3);
        assert_eq!(edge.target(), 1);
        assert_eq!(edge.weight(), 7);
        assert!(!edge.is_loop());
        assert!(WeightedEdge(2, 2, 0.5).is_loop());
    }
}
