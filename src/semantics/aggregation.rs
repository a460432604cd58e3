/// The strength of a single incoming attacker or supporter.
///
/// A strength is made of the score of the source argument and of the weight of the edge.
/// Both lie in `[0,1]`; the contribution of the strength is their product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    value: f64,
    weight: f64,
}

impl Strength {
    /// Builds a new strength given the score of the source argument and the weight of the edge.
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Returns the score of the source argument.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the weighted contribution of this strength.
    pub fn contribution(&self) -> f64 {
        self.value * self.weight
    }
}

/// A trait for the functions that merge the strengths of several attackers (or supporters) into a single influence.
///
/// Implementations compute a raw influence `X` in `[0, +∞)`, which is normalized into `X / (1 + X)`.
/// The combined influence thus lies in `[0,1)`.
///
/// The combination must not depend on the order of the strengths, must be zero when there is no strength,
/// and must not decrease when a value increases.
pub trait Aggregation {
    /// Computes the unbounded influence of a multiset of strengths.
    fn raw_influence(&self, strengths: &[Strength]) -> f64;

    /// Computes the combined influence of a multiset of strengths, in `[0,1)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::semantics::{Aggregation, MaxAggregation, Strength};
    /// let aggregation = MaxAggregation;
    /// assert_eq!(0.0, aggregation.combine(&[]));
    /// assert_eq!(0.5, aggregation.combine(&[Strength::new(1.0, 1.0), Strength::new(0.2, 1.0)]));
    /// ```
    fn combine(&self, strengths: &[Strength]) -> f64 {
        let raw = self.raw_influence(strengths);
        raw / (1.0 + raw)
    }
}

// Sorted so that the result does not depend on the input order.
fn sorted_sum(strengths: &[Strength]) -> f64 {
    let mut contributions = strengths
        .iter()
        .map(|s| s.contribution())
        .collect::<Vec<f64>>();
    contributions.sort_by(f64::total_cmp);
    contributions.iter().sum()
}

/// The max-based aggregation.
///
/// The influence is the one of the strongest source; the other ones are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxAggregation;

impl Aggregation for MaxAggregation {
    fn raw_influence(&self, strengths: &[Strength]) -> f64 {
        strengths
            .iter()
            .map(|s| s.contribution())
            .fold(0.0, |max, c| if c.is_nan() || c > max { c } else { max })
    }
}

/// The cardinality-based aggregation.
///
/// The number of sources prevails: the raw influence is the number of sources,
/// plus the sum of their contributions scaled down by the number of arguments of the graph.
/// Thus, two sources always weigh more than a single one.
#[derive(Debug, Clone, Copy)]
pub struct CardinalityAggregation {
    n_arguments: usize,
}

impl CardinalityAggregation {
    /// Builds a cardinality-based aggregation for a graph with the given number of arguments.
    pub fn new(n_arguments: usize) -> Self {
        Self { n_arguments }
    }
}

impl Aggregation for CardinalityAggregation {
    fn raw_influence(&self, strengths: &[Strength]) -> f64 {
        if strengths.is_empty() {
            return 0.0;
        }
        let n = self.n_arguments.max(strengths.len()) as f64;
        strengths.len() as f64 + sorted_sum(strengths) / n
    }
}

/// The hybrid aggregation.
///
/// The raw influence is the number of sources plus the full sum of their contributions,
/// so that both the count and the individual strengths matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct HybridAggregation;

impl Aggregation for HybridAggregation {
    fn raw_influence(&self, strengths: &[Strength]) -> f64 {
        strengths.len() as f64 + sorted_sum(strengths)
    }
}
