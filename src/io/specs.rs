use crate::{
    graph::{LabelType, WeightedBipolarGraph},
    solvers::{IterationTrace, ScoreState},
};
use anyhow::Result;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while parsing a graph.
///
/// The first parameter is the line number (starting at 1), the second one the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read weighted bipolar argumentation graphs.
pub trait InstanceReader<T>
where
    T: LabelType,
{
    /// Reads a [`WeightedBipolarGraph`].
    /// The [LabelType](crate::graph::LabelType) of the returned graphs depends on the reader.
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::WeightedBipolarGraph;
    /// # use bagarre::io::{BagReader, InstanceReader};
    /// fn read_graph_from_str(s: &str) -> WeightedBipolarGraph<String> {
    ///     let reader = BagReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid graph")
    /// }
    /// # read_graph_from_str("arg(a, 0.5).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<WeightedBipolarGraph<T>>;

    /// Adds a callback function to call when warnings are raised while parsing a graph.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write the results of a solver run.
pub trait ResultWriter<T>
where
    T: LabelType,
{
    /// Writes all the states of a trace, in iteration order.
    fn write_trace(
        &self,
        graph: &WeightedBipolarGraph<T>,
        trace: &IterationTrace,
        writer: &mut dyn Write,
    ) -> Result<()>;

    /// Writes a single state, usually the last one of a trace.
    fn write_final_state(
        &self,
        graph: &WeightedBipolarGraph<T>,
        state: &ScoreState,
        writer: &mut dyn Write,
    ) -> Result<()>;
}
