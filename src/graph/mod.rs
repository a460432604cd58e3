//! This module contains the material used to define weighted bipolar argumentation graphs.

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;
pub use arguments::DEFAULT_WEIGHT;

mod malformed_graph_error;
pub use malformed_graph_error::MalformedGraphError;

mod weighted_bipolar_graph;
pub use weighted_bipolar_graph::Edge;
pub use weighted_bipolar_graph::EdgeKind;
pub use weighted_bipolar_graph::WeightedBipolarGraph;
