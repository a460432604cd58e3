use super::ResultWriter;
use crate::{
    graph::{LabelType, WeightedBipolarGraph},
    solvers::{IterationTrace, ScoreState},
};
use anyhow::{Context, Result};
use std::io::Write;

const SEPARATOR: &str = "---------------------------------------";

/// A writer producing human readable tables.
///
/// Each state is printed as a table with one line per argument; degrees are written with six decimals.
pub struct TableResultWriter {
    title: String,
}

impl TableResultWriter {
    /// Builds a writer which prints the given title above the tables.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    fn write_table<T>(
        &self,
        graph: &WeightedBipolarGraph<T>,
        state: &ScoreState,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>
    where
        T: LabelType,
    {
        writeln!(writer, "{:<10} {:<12} {:<12}", "Argument", "f(a)", "g(a)")?;
        for arg in graph.argument_set().iter() {
            let score = state.score_of(arg);
            writeln!(
                writer,
                "{:<10} {:<12.6} {:<12.6}",
                arg.to_string(),
                score.acceptability(),
                score.rejectability()
            )?;
        }
        Ok(())
    }
}

impl<T> ResultWriter<T> for TableResultWriter
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
        for (iteration, state) in trace.iter() {
            writeln!(writer, "{} (iteration {})", self.title, iteration).context(context)?;
            writeln!(writer, "{}", SEPARATOR).context(context)?;
            self.write_table(graph, state, writer).context(context)?;
            writeln!(writer).context(context)?;
        }
        writer.flush().context(context)
    }

    fn write_final_state(
        &self,
        graph: &WeightedBipolarGraph<T>,
        state: &ScoreState,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a final state";
        writeln!(writer, "{}", self.title).context(context)?;
        writeln!(writer, "{}", SEPARATOR).context(context)?;
        self.write_table(graph, state, writer).context(context)?;
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::EdgeKind, solvers::Score};
    use std::io::BufWriter;

    #[test]
    fn test_write_final_state() {
        let graph = WeightedBipolarGraph::load(
            &[("a", 1.0), ("b", 1.0)],
            &[("a", "b", EdgeKind::Attack, 1.0)],
        )
        .unwrap();
        let state = ScoreState::new(vec![Score::new(1.0, 0.0), Score::new(0.4, 0.6)]);
        let mut buffer = BufWriter::new(Vec::new());
        TableResultWriter::new("[ARC] Final degrees")
            .write_final_state(&graph, &state, &mut buffer)
            .unwrap();
        let expected = vec![
            "[ARC] Final degrees",
            SEPARATOR,
            "Argument   f(a)         g(a)        ",
            "a          1.000000     0.000000    ",
            "b          0.400000     0.600000    ",
            "",
        ]
        .join("\n");
        assert_eq!(
            expected,
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_trace_prints_every_state() {
        let graph = WeightedBipolarGraph::load(&[("a", 0.5)], &[]).unwrap();
        let trace = crate::solvers::BilateralSolver::new(&graph, crate::semantics::Semantics::ARH)
            .solve()
            .unwrap()
            .trace()
            .clone();
        let mut buffer = BufWriter::new(Vec::new());
        TableResultWriter::new("[ARH] Degrees")
            .write_trace(&graph, &trace, &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer.into_inner().unwrap()).unwrap();
        assert!(output.contains("[ARH] Degrees (iteration 0)"));
        assert!(output.contains("[ARH] Degrees (iteration 1)"));
        assert_eq!(2, output.matches("a          0.500000     0.000000").count());
    }
}
