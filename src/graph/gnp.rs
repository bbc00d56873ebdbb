use crate::graph::*;
use rand::{Rng, distributions::Distribution, seq::SliceRandom};
use rand_distr::Geometric;

pub trait WeightedGraphGenerator: GraphEdgeEditing + Sized {
    /// Generates a directed Gilbert (also, wrongly, known as Erdos-Reyni) graph.
    /// The graph contains n nodes and each of the `n(n-1)` directed non-loop edges exists
    /// independently with probability `p`. Weights are drawn i.i.d. from `weights`.
    fn random_gnp<R, D>(rng: &mut R, n: NumNodes, p: f64, weights: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>;

    /// Generates a graph with exactly `m` directed non-loop edges whose endpoints are drawn
    /// uniformly at random; parallel edges may occur. Graphs with less than two nodes have
    /// no edges.
    fn random_gnm<R, D>(rng: &mut R, n: NumNodes, m: NumEdges, weights: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>;

    /// Generates a graph in which every node is reachable from `root`. It contains a uniformly
    /// drawn spanning out-tree rooted at `root` and is filled up with random edges until it
    /// has `max(m, n-1)` edges. The edges are returned in random order.
    fn random_feasible<R, D>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        root: Node,
        weights: &D,
    ) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>;
}

impl<G> WeightedGraphGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_gnp<R, D>(rng: &mut R, n: NumNodes, p: f64, weights: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>,
    {
        let mut result = Self::new(n);

        // indirection via vector as we need a &mut for rng and the weights also needs rng
        let pairs: Vec<_> = BernoulliSamplingRange::new(rng, 0, (n as i64) * (n as i64), p)
            .filter_map(|x| {
                let u = x / (n as i64);
                let v = x % (n as i64);
                (u != v).then_some((u as Node, v as Node))
            })
            .collect();

        for (u, v) in pairs {
            let w = weights.sample(rng);
            result.add_edge(u, v, w);
        }

        result
    }

    fn random_gnm<R, D>(rng: &mut R, n: NumNodes, m: NumEdges, weights: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>,
    {
        let mut result = Self::new(n);
        if n < 2 {
            return result;
        }

        for _ in 0..m {
            let (u, v) = random_non_loop_pair(rng, n);
            let w = weights.sample(rng);
            result.add_edge(u, v, w);
        }

        result
    }

    fn random_feasible<R, D>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        root: Node,
        weights: &D,
    ) -> Self
    where
        R: Rng,
        D: Distribution<Self::EdgeWeight>,
    {
        debug_assert!(root < n);

        let mut order: Vec<Node> = (0..n).filter(|&u| u != root).collect();
        order.shuffle(rng);

        let mut edges = Vec::with_capacity((m as usize).max(n as usize));
        for (i, &v) in order.iter().enumerate() {
            let parent = match rng.gen_range(0..=i) {
                0 => root,
                j => order[j - 1],
            };
            edges.push(WeightedEdge(parent, v, weights.sample(rng)));
        }

        if n >= 2 {
            while (edges.len() as NumEdges) < m {
                let (u, v) = random_non_loop_pair(rng, n);
                edges.push(WeightedEdge(u, v, weights.sample(rng)));
            }
        }

        edges.shuffle(rng);

        let mut result = Self::new(n);
        result.add_edges(edges);
        result
    }
}

fn random_non_loop_pair<R: Rng>(rng: &mut R, n: NumNodes) -> (Node, Node) {
    debug_assert!(n >= 2);
    let u = rng.gen_range(0..n);
    // draw from n-1 candidates and skip over u
    let v = rng.gen_range(0..n - 1);
    (u, if v >= u { v + 1 } else { v })
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            // only fails for probabilities outside of [0, 1]
            distr: Geometric::new(prob).ok(),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr.as_ref() else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, distributions::Uniform};
    use rand_pcg::Pcg64;

    #[test]
    fn test_bernoulli_range() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        // empty range
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 0, 1.0).count(), 0);

        // p=1
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 10, 1.0).count(), 10);

        // p=0
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 100, 0.0).count(), 0);

        // test that we see each element ~p*n times
        let min = 3;
        let max = 100;
        let mut counts = vec![0; max as usize];
        for _ in 0..1000 {
            let b = BernoulliSamplingRange::new(rng, min, max, 0.25);
            for x in b {
                assert!(min <= x);
                assert!(x < max);
                counts[x as usize] += 1;
            }
        }

        assert!(counts.iter().enumerate().all(|(i, &c)| {
            if i < min as usize {
                c == 0
            } else {
                (150..350).contains(&c)
            }
        }));
    }

    #[test]
    fn test_gnp() {
        let rng = &mut Pcg64::seed_from_u64(42);
        let weights = Uniform::new_inclusive(0u64, 10);

        // generate multiple graphs of various densities and verify that the
        // expected number of edges is close to the expected value
        for p in [0.001, 0.01, 0.1] {
            let repeats = 100;
            let n = 100;

            let mean_edges = (0..repeats)
                .map(|_| {
                    WeightedDigraph::<u64>::random_gnp(rng, n, p, &weights).number_of_edges() as f64
                })
                .sum::<f64>()
                / repeats as f64;

            let expected = p * (n as f64) * ((n - 1) as f64);

            assert!((0.75 * expected..1.25 * expected).contains(&mean_edges));
        }
    }

    #[test]
    fn test_gnm() {
        let rng = &mut Pcg64::seed_from_u64(7);
        let weights = Uniform::new_inclusive(1u32, 5);

        for n in [0, 1, 2, 10] {
            let graph: WeightedDigraph<u32> = WeightedDigraph::random_gnm(rng, n, 50, &weights);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), if n < 2 { 0 } else { 50 });
            assert!(graph.edges().iter().all(|e| !e.is_loop()));
            assert!(graph.edges().iter().all(|e| (1..=5).contains(&e.weight())));
            assert!(
                graph
                    .edges()
                    .iter()
                    .all(|e| e.source() < n && e.target() < n)
            );
        }
    }

    #[test]
    fn test_feasible_reaches_all_nodes() {
        let rng = &mut Pcg64::seed_from_u64(99);
        let weights = Uniform::new_inclusive(0u64, 100);

        for n in 1..30 {
            let root = rng.gen_range(0..n);
            let m = rng.gen_range(0..3 * n as NumEdges);
            let graph: WeightedDigraph<u64> =
                WeightedDigraph::random_feasible(rng, n, m, root, &weights);

            assert_eq!(graph.number_of_edges(), m.max(n as NumEdges - 1));

            // simple fixed point iteration suffices for these sizes
            let mut reached = vec![false; n as usize];
            reached[root as usize] = true;
            loop {
                let mut changed = false;
                for e in graph.edges() {
                    if reached[e.source() as usize] && !reached[e.target() as usize] {
                        reached[e.target() as usize] = true;
                        changed = true;
                    }
                }
                if !changed {
                    break;
                }
            }

            assert!(reached.iter().all(|&r| r), "n={n} root={root}");
        }
    }
}
