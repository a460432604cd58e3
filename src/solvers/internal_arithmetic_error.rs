/// The error raised when the update rule produces a value which is not a finite number.
///
/// With weights in `[0,1]` this cannot happen; such an error reveals a bug and is never masked by clamping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("the {degree} of argument {argument} is not a finite number at iteration {iteration} (got {value})")]
pub struct InternalArithmeticError {
    /// the label of the argument
    pub argument: String,
    /// the name of the faulty degree
    pub degree: &'static str,
    /// the iteration during which the value was computed
    pub iteration: usize,
    /// the faulty value
    pub value: f64,
}
