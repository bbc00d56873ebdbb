use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use super::{
    contraction::contract_cycles,
    cycle::{Cycle, find_all_cycles, find_cycle},
    selector::{Selection, select_min_incoming_edges},
};
use crate::{
    algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm},
    errors::Infeasible,
    graph::*,
    utils::FlagMarker,
};

/// How many cycles are contracted per reduction round. Both strategies compute the same weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContractionStrategy {
    /// Contract the first cycle found; the selection is recomputed afterwards
    #[default]
    Sequential,
    /// Contract all (node-disjoint) cycles of the selection at once
    Batch,
}

#[derive(Debug, Error)]
#[error("unknown contraction strategy {0:?}; expected \"sequential\" or \"batch\"")]
pub struct UnknownStrategy(String);

impl FromStr for ContractionStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "batch" => Ok(Self::Batch),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for ContractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Batch => write!(f, "batch"),
        }
    }
}

pub type Outcome<W> = Result<W, Infeasible>;

/// Chu-Liu/Edmonds reduction computing the weight of a minimum arborescence.
///
/// Each call of [`IterativeAlgorithm::execute_step`] carries out one reduction round:
///  1. select the cheapest edge entering each node except the root; if some node has no
///     incoming edge, there is no arborescence,
///  2. search the selection for cycles; if there is none, the selection is a minimum
///     arborescence of the current graph and we are done,
///  3. otherwise pay for the selected edges of the cycle(s) and contract them.
///
/// Every contraction replaces at least two nodes by a single one, so there are at most `n - 1`
/// rounds with a contraction, each taking time `O(n + m)`.
pub struct ChuLiuEdmonds<W: Weight> {
    graph: WeightedDigraph<W>,
    absorbed: FlagMarker,
    root: Node,
    total_weight: W,
    strategy: ContractionStrategy,
    iteration: usize,
    outcome: Option<Outcome<W>>,
}

impl<W: Weight> ChuLiuEdmonds<W> {
    pub fn new(graph: WeightedDigraph<W>, root: Node) -> Self {
        debug_assert!(root < graph.number_of_nodes());
        let absorbed = FlagMarker::new(graph.number_of_nodes(), false);
        Self {
            graph,
            absorbed,
            root,
            total_weight: W::zero(),
            strategy: ContractionStrategy::default(),
            iteration: 0,
            outcome: None,
        }
    }

    pub fn with_strategy(mut self, strategy: ContractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Number of reduction rounds carried out so far
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Number of nodes of the current graph that were not absorbed into a super node
    pub fn number_of_live_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes() - self.absorbed.number_of_marked()
    }

    /// Runs the reduction to completion and returns its outcome
    pub fn solve(mut self) -> Outcome<W> {
        loop {
            if let Some(outcome) = self.outcome.take() {
                return outcome;
            }
            self.execute_step();
        }
    }

    fn cycles_to_contract(&self, selection: &Selection<W>) -> Vec<Cycle> {
        match self.strategy {
            ContractionStrategy::Sequential => find_cycle(selection).into_iter().collect(),
            ContractionStrategy::Batch => find_all_cycles(selection),
        }
    }
}

impl<W: Weight> IterativeAlgorithm<Outcome<W>> for ChuLiuEdmonds<W> {
    fn execute_step(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.iteration += 1;

        debug!(
            "Round {:>4}: live nodes: {:>5}, edges: {:>6}, root: {}, weight so far: {}",
            self.iteration,
            self.number_of_live_nodes(),
            self.graph.number_of_edges(),
            self.root,
            self.total_weight
        );

        let selection = match select_min_incoming_edges(&self.graph, self.root, &self.absorbed) {
            Ok(selection) => selection,
            Err(node) => {
                debug!("Node {node} has no incoming edge; no arborescence exists");
                self.outcome = Some(Err(Infeasible {
                    node,
                    iteration: self.iteration,
                }));
                return;
            }
        };

        let cycles = self.cycles_to_contract(&selection);
        if cycles.is_empty() {
            self.total_weight += selection.total_weight();
            debug!(
                "Selection is acyclic after {} rounds; weight: {}",
                self.iteration, self.total_weight
            );
            self.outcome = Some(Ok(self.total_weight));
            return;
        }

        for cycle in &cycles {
            self.absorbed.mark_all_with(cycle.iter().copied(), true);
        }

        let graph = std::mem::take(&mut self.graph);
        let contraction = contract_cycles(graph, self.root, &selection, &cycles);

        for (cycle, super_node) in cycles.iter().zip(&contraction.super_nodes) {
            trace!(
                "Contract cycle {:?} into node {super_node}",
                cycle.iter().rev().collect_vec()
            );
        }

        self.total_weight += contraction.cycle_weight;
        self.absorbed.grow_to(contraction.graph.number_of_nodes());
        self.graph = contraction.graph;
        self.root = contraction.root;
    }

    fn is_completed(&self) -> bool {
        self.outcome.is_some()
    }

    fn best_known_solution(&mut self) -> Option<Outcome<W>> {
        self.outcome
    }
}

impl<W: Weight> TerminatingIterativeAlgorithm<Outcome<W>> for ChuLiuEdmonds<W> {}
