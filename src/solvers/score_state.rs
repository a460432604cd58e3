use crate::graph::{Argument, LabelType, WeightedBipolarGraph};
use strum_macros::AsRefStr;

/// The acceptability and the rejectability of a single argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    acceptability: f64,
    rejectability: f64,
}

impl Score {
    /// Builds a new score.
    pub fn new(acceptability: f64, rejectability: f64) -> Self {
        Self {
            acceptability,
            rejectability,
        }
    }

    /// Returns the acceptability degree (σ⁺).
    pub fn acceptability(&self) -> f64 {
        self.acceptability
    }

    /// Returns the rejectability degree (σ⁻).
    pub fn rejectability(&self) -> f64 {
        self.rejectability
    }

    /// The greatest absolute difference between the two degrees of this score and the ones of another score.
    pub fn distance(&self, other: &Score) -> f64 {
        f64::max(
            (self.acceptability - other.acceptability).abs(),
            (self.rejectability - other.rejectability).abs(),
        )
    }
}

/// The scores of all the arguments of a graph at a given iteration.
///
/// Scores are indexed by argument ids.
/// A state is never modified once it has been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    scores: Vec<Score>,
}

impl ScoreState {
    /// Builds the initial state of a graph: each argument gets its base weight as acceptability and a null rejectability.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::WeightedBipolarGraph;
    /// # use bagarre::solvers::ScoreState;
    /// let graph = WeightedBipolarGraph::load(&[("a", 0.7)], &[]).unwrap();
    /// let state = ScoreState::initial(&graph);
    /// let a = graph.argument_set().get_argument(&"a").unwrap();
    /// assert_eq!(0.7, state.score_of(a).acceptability());
    /// assert_eq!(0.0, state.score_of(a).rejectability());
    /// ```
    pub fn initial<T>(graph: &WeightedBipolarGraph<T>) -> Self
    where
        T: LabelType,
    {
        Self {
            scores: graph
                .argument_set()
                .iter()
                .map(|a| Score::new(a.base_weight(), 0.0))
                .collect(),
        }
    }

    pub(crate) fn new(scores: Vec<Score>) -> Self {
        Self { scores }
    }

    /// Returns the score of an argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument does not belong to the graph this state was computed for.
    pub fn score_of<T>(&self, arg: &Argument<T>) -> &Score
    where
        T: LabelType,
    {
        &self.scores[arg.id()]
    }

    /// Returns the score of the argument with the given id.
    pub fn score_of_id(&self, id: usize) -> &Score {
        &self.scores[id]
    }

    /// Returns the number of scores in this state.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` iff this state has no score.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterates over the scores, in argument id order.
    pub fn iter(&self) -> impl Iterator<Item = &Score> + '_ {
        self.scores.iter()
    }

    /// Returns the greatest change of a degree between this state and another one.
    ///
    /// Returns zero for empty states.
    ///
    /// # Panics
    ///
    /// Panics if the states do not have the same length.
    pub fn max_distance(&self, other: &ScoreState) -> f64 {
        assert_eq!(self.len(), other.len(), "states of different graphs");
        self.scores
            .iter()
            .zip(other.scores.iter())
            .map(|(s1, s2)| s1.distance(s2))
            .fold(0.0, f64::max)
    }
}

/// The terminal status of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum SolverStatus {
    /// The greatest change between the two last states fell below the threshold.
    #[strum(serialize = "converged")]
    Converged,
    /// The iteration cap was reached before convergence; the last state is a best-effort result.
    #[strum(serialize = "max iterations reached")]
    MaxIterationsReached,
}

/// The ordered sequence of states computed by a solver.
///
/// The state at index 0 is the initial state; the state at index `i > 0` is the one computed by the `i`-th iteration.
/// States are only appended, never modified.
#[derive(Debug, Clone)]
pub struct IterationTrace {
    states: Vec<ScoreState>,
}

impl IterationTrace {
    pub(crate) fn new(initial: ScoreState) -> Self {
        Self {
            states: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, state: ScoreState) {
        self.states.push(state)
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &ScoreState {
        &self.states[0]
    }

    /// Returns the last computed state.
    pub fn last_state(&self) -> &ScoreState {
        &self.states[self.states.len() - 1]
    }

    /// Returns the state at the given index (0 is the initial state).
    pub fn state(&self, index: usize) -> Option<&ScoreState> {
        self.states.get(index)
    }

    /// Returns the number of completed iterations (the initial state is not counted).
    pub fn n_iterations(&self) -> usize {
        self.states.len() - 1
    }

    /// Iterates over the states with their indexes, starting with the initial state.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ScoreState)> + '_ {
        self.states.iter().enumerate()
    }
}

/// The result of a solver run: the trace and the status it ended with.
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    trace: IterationTrace,
    status: SolverStatus,
    last_distance: f64,
}

impl SolverOutcome {
    pub(crate) fn new(trace: IterationTrace, status: SolverStatus, last_distance: f64) -> Self {
        Self {
            trace,
            status,
            last_distance,
        }
    }

    /// Returns the full trace of the run.
    pub fn trace(&self) -> &IterationTrace {
        &self.trace
    }

    /// Returns the final state, whatever the status is.
    pub fn final_state(&self) -> &ScoreState {
        self.trace.last_state()
    }

    /// Returns the status the run ended with.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Returns `true` iff the run converged.
    pub fn has_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }

    /// Returns the greatest change observed during the last iteration.
    pub fn last_distance(&self) -> f64 {
        self.last_distance
    }

    /// Returns the number of completed iterations.
    pub fn n_iterations(&self) -> usize {
        self.trace.n_iterations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeKind;

    #[test]
    fn test_initial_state() {
        let graph = WeightedBipolarGraph::load(
            &[("a", 0.2), ("b", 1.0)],
            &[("a", "b", EdgeKind::Attack, 1.0)],
        )
        .unwrap();
        let state = ScoreState::initial(&graph);
        assert_eq!(2, state.len());
        assert_eq!(Score::new(0.2, 0.0), *state.score_of_id(0));
        assert_eq!(Score::new(1.0, 0.0), *state.score_of_id(1));
    }

    #[test]
    fn test_max_distance() {
        let s1 = ScoreState::new(vec![Score::new(0.5, 0.5), Score::new(1.0, 0.0)]);
        let s2 = ScoreState::new(vec![Score::new(0.25, 0.5), Score::new(1.0, 0.75)]);
        assert_eq!(0.75, s1.max_distance(&s2));
        assert_eq!(0.0, s1.max_distance(&s1));
    }

    #[test]
    fn test_max_distance_empty() {
        let s = ScoreState::new(vec![]);
        assert!(s.is_empty());
        assert_eq!(0.0, s.max_distance(&s));
    }

    #[test]
    #[should_panic(expected = "states of different graphs")]
    fn test_max_distance_different_lengths() {
        let s1 = ScoreState::new(vec![Score::new(0.5, 0.5)]);
        let s2 = ScoreState::new(vec![]);
        s1.max_distance(&s2);
    }

    #[test]
    fn test_trace() {
        let mut trace = IterationTrace::new(ScoreState::new(vec![Score::new(1.0, 0.0)]));
        assert_eq!(0, trace.n_iterations());
        trace.push(ScoreState::new(vec![Score::new(0.5, 0.5)]));
        assert_eq!(1, trace.n_iterations());
        assert_eq!(Score::new(1.0, 0.0), *trace.initial_state().score_of_id(0));
        assert_eq!(Score::new(0.5, 0.5), *trace.last_state().score_of_id(0));
        assert!(trace.state(2).is_none());
        assert_eq!(vec![0, 1], trace.iter().map(|(i, _)| i).collect::<Vec<_>>());
    }

    #[test]
    fn test_status_names() {
        assert_eq!("converged", SolverStatus::Converged.as_ref());
        assert_eq!(
            "max iterations reached",
            SolverStatus::MaxIterationsReached.as_ref()
        );
    }
}
