use anyhow::{Context, Result};
use bagarre::{
    graph::{LabelType, WeightedBipolarGraph},
    io::InstanceReader,
    semantics::{read_semantics_list, Semantics},
    solvers::{
        BilateralSolver, IterationListener, ScoreState, SolverConfig, SolverOutcome,
        SolverStatus, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
    },
};
use clap::{Arg, ArgMatches};
use log::{debug, info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use strum::IntoEnumIterator;

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .long("file")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the graph")
        .required(true)
}

pub(crate) const ARG_SEMANTICS: &str = "SEMANTICS";

pub(crate) fn semantics_arg(multiple: bool) -> Arg<'static, 'static> {
    let arg = Arg::with_name(ARG_SEMANTICS)
        .short("s")
        .long("semantics")
        .empty_values(false);
    if multiple {
        arg.multiple(true)
            .number_of_values(1)
            .help("the semantics to compute, as a comma separated list (defaults to ARM,ARC,ARH)")
            .required(false)
    } else {
        arg.multiple(false)
            .help("the semantics to compute (ARM, ARC or ARH)")
            .required(true)
    }
}

pub(crate) fn read_semantics_arg(arg_matches: &ArgMatches<'_>) -> Result<Semantics> {
    let value = arg_matches.value_of(ARG_SEMANTICS).unwrap_or_default();
    Semantics::try_from(value).context("while reading the semantics")
}

pub(crate) fn read_semantics_args(arg_matches: &ArgMatches<'_>) -> Result<Vec<Semantics>> {
    match arg_matches.values_of(ARG_SEMANTICS) {
        Some(values) => read_semantics_list(&values.collect::<Vec<&str>>().join(","))
            .context("while reading the semantics"),
        None => Ok(Semantics::iter().collect()),
    }
}

const ARG_EPSILON: &str = "EPSILON";
const ARG_MAX_ITERATIONS: &str = "MAX_ITERATIONS";

pub(crate) fn solver_config_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_EPSILON)
            .long("epsilon")
            .empty_values(false)
            .multiple(false)
            .help("the convergence threshold (default: 1e-4)")
            .required(false),
        Arg::with_name(ARG_MAX_ITERATIONS)
            .long("max-iterations")
            .empty_values(false)
            .multiple(false)
            .help("the maximal number of iterations (default: 20)")
            .required(false),
    ]
}

pub(crate) fn read_solver_config(arg_matches: &ArgMatches<'_>) -> Result<SolverConfig> {
    let epsilon = match arg_matches.value_of(ARG_EPSILON) {
        Some(e) => e
            .parse::<f64>()
            .with_context(|| format!(r#"invalid convergence threshold "{}""#, e))?,
        None => DEFAULT_EPSILON,
    };
    let max_iterations = match arg_matches.value_of(ARG_MAX_ITERATIONS) {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!(r#"invalid iteration cap "{}""#, n))?,
        None => DEFAULT_MAX_ITERATIONS,
    };
    SolverConfig::new(epsilon, max_iterations).context("while reading the solver configuration")
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<WeightedBipolarGraph<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!(r#"while opening file "{}""#, file_path))?,
    );
    let graph = reader
        .read(&mut file_reader)
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!(
        "the graph has {} argument(s), {} attack(s) and {} support(s)",
        graph.n_arguments(),
        graph.n_attacks(),
        graph.n_supports(),
    );
    Ok(graph)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

/// Logs the progress of the solvers.
#[derive(Default)]
pub(crate) struct IterationLogger;

impl IterationListener for IterationLogger {
    fn solving_start(&self, n_arguments: usize, semantics: Semantics, config: &SolverConfig) {
        info!(
            "computing {} degrees for {} argument(s) (epsilon={}, max iterations={})",
            semantics.as_ref(),
            n_arguments,
            config.epsilon(),
            config.max_iterations()
        );
    }

    fn iteration_end(&self, iteration: usize, _state: &ScoreState, distance: f64) {
        debug!("iteration {}: delta={}", iteration, distance);
    }

    fn solving_end(&self, status: SolverStatus, n_iterations: usize) {
        match status {
            SolverStatus::Converged => info!("converged after {} iteration(s)", n_iterations),
            SolverStatus::MaxIterationsReached => {
                warn!("did not converge within {} iteration(s)", n_iterations)
            }
        }
    }
}

pub(crate) fn solve_with_logger<T>(
    graph: &WeightedBipolarGraph<T>,
    semantics: Semantics,
    config: SolverConfig,
) -> Result<SolverOutcome>
where
    T: LabelType,
{
    let mut solver = BilateralSolver::new_with_config(graph, semantics, config);
    solver.add_listener(Box::<IterationLogger>::default());
    solver
        .solve()
        .with_context(|| format!("while computing {} degrees", semantics.as_ref()))
}

pub(crate) fn final_table_title(
    semantics: Semantics,
    file_name: &str,
    outcome: &SolverOutcome,
) -> String {
    let status = match outcome.status() {
        SolverStatus::Converged => "converged after",
        SolverStatus::MaxIterationsReached => "no convergence within",
    };
    format!(
        "[{}] Final degrees for {} ({} {} iteration(s))",
        semantics.as_ref(),
        file_name,
        status,
        outcome.n_iterations()
    )
}

pub(crate) fn write_to_path<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let context = || format!("while writing file {:?}", path);
    let mut writer = BufWriter::new(File::create(path).with_context(context)?);
    (write)(&mut writer).with_context(context)?;
    info!("results written to {:?}", path);
    Ok(())
}
