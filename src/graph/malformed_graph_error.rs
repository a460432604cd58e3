use super::EdgeKind;

/// The structural errors that prevent a weighted bipolar argumentation graph from being built.
///
/// These errors are fatal for the input they come from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedGraphError {
    /// An edge refers to an argument that was never declared.
    #[error("undeclared argument {label}")]
    UndeclaredArgument {
        /// the label of the missing argument
        label: String,
    },

    /// A weight lies outside `[0,1]` (or is not a number).
    #[error("the weight of {element} is not in [0,1] (got {weight})")]
    WeightOutOfRange {
        /// a description of the weighted element
        element: String,
        /// the invalid weight
        weight: f64,
    },

    /// The same label is used by two arguments.
    #[error("argument {label} is declared twice")]
    DuplicateArgument {
        /// the label of the argument
        label: String,
    },

    /// The same edge is declared twice.
    #[error("{kind} from {from} to {to} is declared twice")]
    DuplicateEdge {
        /// the kind of the edge
        kind: EdgeKind,
        /// the label of the source argument
        from: String,
        /// the label of the target argument
        to: String,
    },
}
