use super::{
    ConvergenceJudge, InternalArithmeticError, IterationListener, IterationTrace, Score,
    ScoreState, SolverConfig, SolverOutcome, SolverStatus,
};
use crate::{
    graph::{Argument, LabelType, WeightedBipolarGraph},
    semantics::{Aggregation, Semantics, Strength},
};
use anyhow::Result;

/// A solver computing the acceptability and rejectability degrees of a bilateral gradual semantics.
///
/// Starting from the initial state (acceptability set to the base weight, null rejectability),
/// the solver computes each new state from the previous one, for all the arguments at once.
/// For an argument `a` with base weight `w`, the aggregation of its founded attackers gives
/// the attack damping `A` (over `σ⁺(b) / (1 + σ⁻(b))`) and the attack pressure `R` (over `σ⁺(b)`),
/// while the aggregation of its founded supporters gives the support boost `S` (over `σ⁺(s)`).
/// Then:
///
/// ```text
/// σ⁺(a) = w·(1 − A) + (1 − w·(1 − A))·S
/// σ⁻(a) = R·(1 − S)
/// ```
///
/// Without supports, this is `σ⁺(a) = w / (1 + X_A)` and `σ⁻(a) = X_R / (1 + X_R)` where `X` is the raw influence of the semantics.
///
/// The computation stops when the greatest change of a degree falls below the threshold of the [`SolverConfig`],
/// or when its iteration cap is reached; in the latter case the last state is still returned.
pub struct BilateralSolver<'a, T>
where
    T: LabelType,
{
    graph: &'a WeightedBipolarGraph<T>,
    semantics: Semantics,
    aggregation: Box<dyn Aggregation>,
    config: SolverConfig,
    listeners: Vec<Box<dyn IterationListener>>,
}

impl<'a, T> BilateralSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver using the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::{EdgeKind, WeightedBipolarGraph};
    /// # use bagarre::semantics::Semantics;
    /// # use bagarre::solvers::{BilateralSolver, SolverStatus};
    /// let graph = WeightedBipolarGraph::load(
    ///     &[("a", 1.0), ("b", 1.0)],
    ///     &[("a", "b", EdgeKind::Attack, 1.0)],
    /// )
    /// .unwrap();
    /// let outcome = BilateralSolver::new(&graph, Semantics::ARM).solve().unwrap();
    /// assert_eq!(SolverStatus::Converged, outcome.status());
    /// let b = graph.argument_set().get_argument(&"b").unwrap();
    /// assert_eq!(0.5, outcome.final_state().score_of(b).acceptability());
    /// assert_eq!(0.5, outcome.final_state().score_of(b).rejectability());
    /// ```
    pub fn new(graph: &'a WeightedBipolarGraph<T>, semantics: Semantics) -> Self {
        Self::new_with_config(graph, semantics, SolverConfig::default())
    }

    /// Builds a new solver using the provided configuration.
    pub fn new_with_config(
        graph: &'a WeightedBipolarGraph<T>,
        semantics: Semantics,
        config: SolverConfig,
    ) -> Self {
        Self {
            graph,
            semantics,
            aggregation: semantics.aggregation(graph.n_arguments()),
            config,
            listeners: vec![],
        }
    }

    #[cfg(test)]
    fn with_aggregation(mut self, aggregation: Box<dyn Aggregation>) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Adds a listener, notified of the progress of the computation.
    pub fn add_listener(&mut self, listener: Box<dyn IterationListener>) {
        self.listeners.push(listener);
    }

    /// Returns the semantics used by this solver.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the configuration of this solver.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Iterates the update rule until convergence or until the iteration cap is reached.
    ///
    /// Reaching the iteration cap is not an error: the returned outcome has the [`SolverStatus::MaxIterationsReached`] status.
    /// An error is returned if the update rule produces a value which is not a finite number (see [`InternalArithmeticError`]).
    pub fn solve(&self) -> Result<SolverOutcome> {
        self.listeners.iter().for_each(|l| {
            l.solving_start(self.graph.n_arguments(), self.semantics, &self.config)
        });
        let judge = ConvergenceJudge::new(self.config.epsilon());
        let mut trace = IterationTrace::new(ScoreState::initial(self.graph));
        let mut last_distance = f64::INFINITY;
        let status = loop {
            if trace.n_iterations() >= self.config.max_iterations() {
                break SolverStatus::MaxIterationsReached;
            }
            let iteration = trace.n_iterations() + 1;
            let next = self.next_state(trace.last_state(), iteration)?;
            let (distance, converged) = judge.judge(trace.last_state(), &next);
            trace.push(next);
            last_distance = distance;
            self.listeners
                .iter()
                .for_each(|l| l.iteration_end(iteration, trace.last_state(), distance));
            if converged {
                break SolverStatus::Converged;
            }
        };
        self.listeners
            .iter()
            .for_each(|l| l.solving_end(status, trace.n_iterations()));
        Ok(SolverOutcome::new(trace, status, last_distance))
    }

    fn next_state(&self, current: &ScoreState, iteration: usize) -> Result<ScoreState> {
        let scores = self
            .graph
            .argument_set()
            .iter()
            .map(|arg| self.next_score(arg, current, iteration))
            .collect::<Result<Vec<Score>>>()?;
        Ok(ScoreState::new(scores))
    }

    fn next_score(
        &self,
        arg: &Argument<T>,
        current: &ScoreState,
        iteration: usize,
    ) -> Result<Score> {
        let mut damping_strengths = vec![];
        let mut pressure_strengths = vec![];
        for attack in self.graph.iter_attackers_of(arg).filter(|e| e.is_founded()) {
            let attacker = current.score_of(attack.source());
            damping_strengths.push(Strength::new(
                attacker.acceptability() / (1.0 + attacker.rejectability()),
                attack.weight(),
            ));
            pressure_strengths.push(Strength::new(attacker.acceptability(), attack.weight()));
        }
        let boost_strengths = self
            .graph
            .iter_supporters_of(arg)
            .filter(|e| e.is_founded())
            .map(|s| {
                Strength::new(
                    current.score_of(s.source()).acceptability(),
                    s.weight(),
                )
            })
            .collect::<Vec<Strength>>();
        let attack_damping = self.aggregation.combine(&damping_strengths);
        let attack_pressure = self.aggregation.combine(&pressure_strengths);
        let support_boost = self.aggregation.combine(&boost_strengths);
        let acceptability = check_finite(
            updated_acceptability(arg.base_weight(), attack_damping, support_boost),
            arg,
            "acceptability",
            iteration,
        )?;
        let rejectability = check_finite(
            updated_rejectability(attack_pressure, support_boost),
            arg,
            "rejectability",
            iteration,
        )?;
        Ok(Score::new(clamp01(acceptability), clamp01(rejectability)))
    }
}

fn updated_acceptability(base_weight: f64, attack_damping: f64, support_boost: f64) -> f64 {
    let damped = base_weight * (1.0 - attack_damping);
    damped + (1.0 - damped) * support_boost
}

fn updated_rejectability(attack_pressure: f64, support_boost: f64) -> f64 {
    attack_pressure * (1.0 - support_boost)
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn check_finite<T>(
    value: f64,
    arg: &Argument<T>,
    degree: &'static str,
    iteration: usize,
) -> Result<f64, InternalArithmeticError>
where
    T: LabelType,
{
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InternalArithmeticError {
            argument: arg.label().to_string(),
            degree,
            iteration,
            value,
        })
    }
}
