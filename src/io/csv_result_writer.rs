use super::ResultWriter;
use crate::{
    graph::{LabelType, WeightedBipolarGraph},
    solvers::{IterationTrace, ScoreState},
};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer producing comma separated values.
///
/// Traces are written with the header `Iteration,Argument,f(a),g(a)`, one line per argument and per state
/// (the initial state has the iteration index 0).
/// Final states are written with the header `Argument,f(a),g(a)`.
/// Arguments are written in declaration order; labels are quoted when needed.
///
/// # Example
///
/// ```
/// # use bagarre::io::{CsvResultWriter, ResultWriter};
/// # use bagarre::graph::WeightedBipolarGraph;
/// # use bagarre::solvers::ScoreState;
/// let graph = WeightedBipolarGraph::load(&[("a", 0.5)], &[]).unwrap();
/// let mut buffer = Vec::new();
/// CsvResultWriter::default()
///     .write_final_state(&graph, &ScoreState::initial(&graph), &mut buffer)
///     .unwrap();
/// assert_eq!("Argument,f(a),g(a)\na,0.5,0.0\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct CsvResultWriter;

fn csv_writer(writer: &mut dyn Write) -> csv::Writer<&mut dyn Write> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

impl<T> ResultWriter<T> for CsvResultWriter
where
    T: LabelType,
{
    fn write_trace(
        &self,
        graph: &WeightedBipolarGraph<T>,
        trace: &IterationTrace,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an iteration trace";
        let mut records = csv_writer(writer);
        records
            .write_record(["Iteration", "Argument", "f(a)", "g(a)"])
            .context(context)?;
        for (iteration, state) in trace.iter() {
            for arg in graph.argument_set().iter() {
                let score = state.score_of(arg);
                records.serialize((
                    iteration,
                    arg.to_string(),
                    score.acceptability(),
                    score.rejectability(),
                ))
                .context(context)?;
            }
        }
        records.flush().context(context)
    }

    fn write_final_state(
        &self,
        graph: &WeightedBipolarGraph<T>,
        state: &ScoreState,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a final state";
        let mut records = csv_writer(writer);
        records
            .write_record(["Argument", "f(a)", "g(a)"])
            .context(context)?;
        for arg in graph.argument_set().iter() {
            let score = state.score_of(arg);
            records.serialize((
                arg.to_string(),
                score.acceptability(),
                score.rejectability(),
            ))
            .context(context)?;
        }
        records.flush().context(context)
    }
}
