use super::{ScoreState, SolverConfig, SolverStatus};
use crate::semantics::Semantics;

/// A trait for objects that follow the progress of a solver.
///
/// Listeners are notified of each state as soon as it is appended to the trace,
/// in iteration order.
pub trait IterationListener {
    /// Called once, before the first iteration.
    fn solving_start(&self, n_arguments: usize, semantics: Semantics, config: &SolverConfig);

    /// Called after each iteration, with the index of the iteration (starting at 1),
    /// the new state and the greatest change with respect to the previous state.
    fn iteration_end(&self, iteration: usize, state: &ScoreState, distance: f64);

    /// Called once, when the solver stops.
    fn solving_end(&self, status: SolverStatus, n_iterations: usize);
}
