use super::{cli_manager, command::Command, common};
use anyhow::Result;
use bagarre::io::{BagReader, CsvResultWriter, ResultWriter, TableResultWriter};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::path::Path;

const CMD_NAME: &str = "solve";

const ARG_ITER_CSV: &str = "ITER_CSV";
const ARG_FINAL_CSV: &str = "FINAL_CSV";
const ARG_PRINT_TRACE: &str = "PRINT_TRACE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the acceptability and rejectability degrees of the arguments of a graph")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::semantics_arg(false))
            .args(&common::solver_config_args())
            .arg(
                Arg::with_name(ARG_ITER_CSV)
                    .long("iter-csv")
                    .empty_values(false)
                    .multiple(false)
                    .help("a file to write the degrees of every iteration to (CSV)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_FINAL_CSV)
                    .long("final-csv")
                    .empty_values(false)
                    .multiple(false)
                    .help("a file to write the final degrees to (CSV)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_PRINT_TRACE)
                    .long("print-trace")
                    .takes_value(false)
                    .help("print the degrees of every iteration, not only the final ones"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap_or_default();
        let semantics = common::read_semantics_arg(arg_matches)?;
        let config = common::read_solver_config(arg_matches)?;
        let graph = common::read_file_path(file, &mut BagReader::default())?;
        let outcome = common::solve_with_logger(&graph, semantics, config)?;
        let file_name = Path::new(file)
            .file_name()
            .map_or_else(|| file.to_string(), |n| n.to_string_lossy().to_string());
        let mut out = std::io::stdout();
        if arg_matches.is_present(ARG_PRINT_TRACE) {
            let writer = TableResultWriter::new(&format!("[{}] Degrees", semantics.as_ref()));
            writer.write_trace(&graph, outcome.trace(), &mut out)?;
        }
        let writer =
            TableResultWriter::new(&common::final_table_title(semantics, &file_name, &outcome));
        writer.write_final_state(&graph, outcome.final_state(), &mut out)?;
        if let Some(path) = arg_matches.value_of(ARG_ITER_CSV) {
            common::write_to_path(Path::new(path), |w| {
                CsvResultWriter::default().write_trace(&graph, outcome.trace(), w)
            })?;
        }
        if let Some(path) = arg_matches.value_of(ARG_FINAL_CSV) {
            common::write_to_path(Path::new(path), |w| {
                CsvResultWriter::default().write_final_state(&graph, outcome.final_state(), w)
            })?;
        }
        Ok(())
    }
}
