//! Solvers computing the acceptability and rejectability degrees of bilateral gradual semantics.

mod bilateral_solver;
pub use bilateral_solver::BilateralSolver;

mod convergence_judge;
pub use convergence_judge::ConvergenceJudge;

mod internal_arithmetic_error;
pub use internal_arithmetic_error::InternalArithmeticError;

mod score_state;
pub use score_state::IterationTrace;
pub use score_state::Score;
pub use score_state::ScoreState;
pub use score_state::SolverOutcome;
pub use score_state::SolverStatus;

mod solver_config;
pub use solver_config::SolverConfig;
pub use solver_config::DEFAULT_EPSILON;
pub use solver_config::DEFAULT_MAX_ITERATIONS;

mod specs;
pub use specs::IterationListener;
