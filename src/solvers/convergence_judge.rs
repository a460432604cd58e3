use super::ScoreState;

/// Decides whether an iterative computation has reached a fixed point.
///
/// Two consecutive states are close enough when no degree of any argument changed by `epsilon` or more.
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceJudge {
    epsilon: f64,
}

impl ConvergenceJudge {
    /// Builds a judge with the given threshold.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Compares two consecutive states.
    ///
    /// Returns the greatest change between them and whether it is below the threshold.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::WeightedBipolarGraph;
    /// # use bagarre::solvers::{ConvergenceJudge, ScoreState};
    /// let graph = WeightedBipolarGraph::load(&[("a", 0.7)], &[]).unwrap();
    /// let state = ScoreState::initial(&graph);
    /// assert_eq!((0.0, true), ConvergenceJudge::new(1e-4).judge(&state, &state));
    /// assert_eq!((0.0, false), ConvergenceJudge::new(0.0).judge(&state, &state));
    /// ```
    pub fn judge(&self, previous: &ScoreState, next: &ScoreState) -> (f64, bool) {
        let distance = previous.max_distance(next);
        (distance, self.is_below_threshold(distance))
    }

    /// Returns `true` iff a change is small enough to stop iterating.
    pub fn is_below_threshold(&self, distance: f64) -> bool {
        distance < self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Score;

    #[test]
    fn test_threshold_is_strict() {
        let judge = ConvergenceJudge::new(1e-4);
        assert!(judge.is_below_threshold(0.0));
        assert!(judge.is_below_threshold(9.9e-5));
        assert!(!judge.is_below_threshold(1e-4));
        assert!(!judge.is_below_threshold(0.5));
    }

    #[test]
    fn test_judge_uses_both_degrees() {
        let s1 = ScoreState::new(vec![Score::new(0.5, 0.0), Score::new(1.0, 0.0)]);
        let s2 = ScoreState::new(vec![Score::new(0.5, 0.0), Score::new(1.0, 0.01)]);
        let (distance, converged) = ConvergenceJudge::new(1e-4).judge(&s1, &s2);
        assert!((distance - 0.01).abs() < 1e-15);
        assert!(!converged);
        assert!(ConvergenceJudge::new(0.1).judge(&s1, &s2).1);
    }
}
