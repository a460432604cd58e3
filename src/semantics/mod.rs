//! The bilateral gradual semantics and the aggregation functions they rely on.

mod aggregation;
pub use aggregation::Aggregation;
pub use aggregation::CardinalityAggregation;
pub use aggregation::HybridAggregation;
pub use aggregation::MaxAggregation;
pub use aggregation::Strength;

#[allow(clippy::module_inception)]
mod semantics;
pub use semantics::read_semantics_list;
pub use semantics::Semantics;
