//! Our solvers are implemented using the [`IterativeAlgorithm`] trait.
//!
//! The idea is that an algorithm does some bounded amount of work (say one reduction round) and
//! then returns to the caller. An external entity can invoke the algorithm at a later point to
//! continue its work, report progress in between, or give up after a timeout.

use std::time::{Duration, Instant};

/// [`IterativeAlgorithm`] provides a consistent interface to execute our algorithms. Observe
/// that it does not prescribe any constructor which is left to the algorithm designer as each
/// algorithm has specific parameters et cetera. The construction phase should, in general, be
/// quite fast and only involve little computation.
///
/// As an adopter of [`IterativeAlgorithm`], you have to implement the methods
///   [`IterativeAlgorithm::execute_step`],
///   [`IterativeAlgorithm::is_completed`] and [`IterativeAlgorithm::best_known_solution`].
///
/// If your algorithm is known to eventually terminate please also implement the marker trait
/// [`TerminatingIterativeAlgorithm`]. It offers an easy interface to run the algorithm to completion.
///
/// # Example
/// ```
/// use mwa::algorithm::IterativeAlgorithm;
///
/// struct Countdown {
///     remaining: u32,
///     steps: u32,
/// }
///
/// impl IterativeAlgorithm<u32> for Countdown {
///     fn execute_step(&mut self) {
///         self.remaining -= 1;
///         self.steps += 1;
///     }
///
///     fn is_completed(&self) -> bool {
///         self.remaining == 0
///     }
///
///     fn best_known_solution(&mut self) -> Option<u32> {
///         self.is_completed().then_some(self.steps)
///     }
/// }
///
/// let mut algo = Countdown { remaining: 3, steps: 0 };
/// algo.run_while(|_| true);
/// assert_eq!(algo.best_known_solution(), Some(3));
/// ```
pub trait IterativeAlgorithm<Solution> {
    /// Advances the computation of this algorithm by one round.
    fn execute_step(&mut self);

    /// Returns true iff the algorithm is completed and [`IterativeAlgorithm::execute_step`] may not
    /// be called again.
    fn is_completed(&self) -> bool;

    /// Returns the currently best known solution or None if no solution is known yet.
    fn best_known_solution(&mut self) -> Option<Solution>;

    /// Execute the algorithm and keeps calling [`IterativeAlgorithm::execute_step`] until the
    /// `predicate` becomes false or [`IterativeAlgorithm::is_completed`] becomes true.
    /// The function `predicate` is evaluated after each iteration, i.e. a step is
    /// carried out even if the predicate always returns false.
    fn run_while<F: FnMut(&mut Self) -> bool>(&mut self, mut predicate: F) {
        while !self.is_completed() {
            self.execute_step();

            if !predicate(self) {
                break;
            }
        }
    }

    /// Execute the algorithm and keeps calling [`IterativeAlgorithm::execute_step`] until either a
    /// timeout occurred or [`IterativeAlgorithm::is_completed`] is true. Observe that the timeout
    /// is guaranteed only in the sense that [`IterativeAlgorithm::execute_step`] is not called
    /// again after the timeout; if a single step takes too long the timeout will be violated.
    fn run_until_timeout(&mut self, timeout: Duration) {
        let start = Instant::now();
        self.run_while(|_| start.elapsed() < timeout);
    }
}

/// [`TerminatingIterativeAlgorithm`] is a marker trait, i.e. to adopt it, you give an empty `impl`
/// block. Add this trait to algorithms that will eventually terminate (i.e. in contrast to an
/// algorithm does not know when to stop).
pub trait TerminatingIterativeAlgorithm<Solution>: IterativeAlgorithm<Solution> {
    /// Execute the algorithm until it completed and return the solution if it was found.
    fn run_to_completion(&mut self) -> Option<Solution> {
        while !self.is_completed() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
