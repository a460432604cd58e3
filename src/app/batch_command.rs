use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use bagarre::{
    io::{BagReader, CsvResultWriter, ResultWriter, TableResultWriter},
    semantics::Semantics,
    solvers::SolverConfig,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CMD_NAME: &str = "batch";

const ARG_DIRECTORY: &str = "DIRECTORY";

const INPUT_EXTENSION: &str = "bag";

pub(crate) struct BatchCommand;

impl BatchCommand {
    pub(crate) fn new() -> Self {
        BatchCommand
    }
}

impl<'a> Command<'a> for BatchCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the degrees for all the .bag files of a directory and writes them next to the inputs")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_DIRECTORY)
                    .short("d")
                    .long("directory")
                    .empty_values(false)
                    .multiple(false)
                    .help("the directory to look for .bag files in (recursively)")
                    .required(true),
            )
            .arg(common::semantics_arg(true))
            .args(&common::solver_config_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let directory = arg_matches.value_of(ARG_DIRECTORY).unwrap_or_default();
        let semantics = common::read_semantics_args(arg_matches)?;
        let config = common::read_solver_config(arg_matches)?;
        let root = common::canonicalize_file_path(directory)?;
        let files = list_input_files(&root)?;
        if files.is_empty() {
            warn!("no .{} file found in {:?}", INPUT_EXTENSION, root);
            return Ok(());
        }
        info!("found {} input file(s) in {:?}", files.len(), root);
        let mut n_failures = 0;
        for file in files.iter() {
            if let Err(e) = process_file(file, &semantics, config) {
                n_failures += 1;
                error!("failed to process {:?}: {}", file, e);
                e.chain()
                    .skip(1)
                    .for_each(|cause| error!("caused by: {}", cause));
            }
        }
        if n_failures > 0 {
            return Err(anyhow!(
                "{} of the {} input file(s) could not be processed",
                n_failures,
                files.len()
            ));
        }
        Ok(())
    }
}

fn list_input_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("while walking through {:?}", root))?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map_or(false, |ext| ext == INPUT_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn output_path(file: &Path, semantics: Semantics, kind: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    file.with_file_name(format!(
        "{}_{}_{}.csv",
        stem,
        semantics.to_lowercase_str(),
        kind
    ))
}

fn process_file(file: &Path, semantics: &[Semantics], config: SolverConfig) -> Result<()> {
    let file_str = file.to_string_lossy();
    let graph = common::read_file_path(&file_str, &mut BagReader::default())?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    for s in semantics.iter() {
        let outcome = common::solve_with_logger(&graph, *s, config)?;
        let table_writer =
            TableResultWriter::new(&common::final_table_title(*s, &file_name, &outcome));
        table_writer.write_final_state(&graph, outcome.final_state(), &mut std::io::stdout())?;
        let csv_writer = CsvResultWriter::default();
        common::write_to_path(&output_path(file, *s, "iter"), |w| {
            csv_writer.write_trace(&graph, outcome.trace(), w)
        })?;
        common::write_to_path(&output_path(file, *s, "final"), |w| {
            csv_writer.write_final_state(&graph, outcome.final_state(), w)
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            PathBuf::from("/tmp/bench/g1_arc_iter.csv"),
            output_path(Path::new("/tmp/bench/g1.bag"), Semantics::ARC, "iter")
        );
        assert_eq!(
            PathBuf::from("g1.v2_arm_final.csv"),
            output_path(Path::new("g1.v2.bag"), Semantics::ARM, "final")
        );
    }
}
