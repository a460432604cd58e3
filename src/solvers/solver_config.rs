use anyhow::{anyhow, Result};

/// The default convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// The default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// The parameters of a solver run.
///
/// The run stops as soon as the greatest change of a degree between two iterations falls below `epsilon`,
/// or when `max_iterations` iterations have been computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    epsilon: f64,
    max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Builds a new configuration.
    ///
    /// The threshold must be a non-negative number and at least one iteration must be allowed.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::solvers::SolverConfig;
    /// assert!(SolverConfig::new(1e-6, 100).is_ok());
    /// assert!(SolverConfig::new(-1.0, 100).is_err());
    /// assert!(SolverConfig::new(1e-6, 0).is_err());
    /// ```
    pub fn new(epsilon: f64, max_iterations: usize) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(anyhow!(
                "the convergence threshold must be a non-negative number (got {})",
                epsilon
            ));
        }
        if max_iterations == 0 {
            return Err(anyhow!("the iteration cap must be at least 1"));
        }
        Ok(Self {
            epsilon,
            max_iterations,
        })
    }

    /// Returns the convergence threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SolverConfig::default();
        assert_eq!(1e-4, config.epsilon());
        assert_eq!(20, config.max_iterations());
    }

    #[test]
    fn test_zero_epsilon_is_allowed() {
        assert_eq!(0.0, SolverConfig::new(0.0, 1).unwrap().epsilon());
    }

    #[test]
    fn test_invalid_epsilon() {
        assert!(SolverConfig::new(f64::NAN, 10).is_err());
        assert!(SolverConfig::new(f64::INFINITY, 10).is_err());
    }
}
