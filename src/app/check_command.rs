use super::{cli_manager, command::Command, common};
use anyhow::Result;
use bagarre::io::BagReader;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input graph files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap_or_default();
        let graph = common::read_file_path(file, &mut BagReader::default())?;
        println!(
            "{} argument(s), {} attack(s), {} support(s)",
            graph.n_arguments(),
            graph.n_attacks(),
            graph.n_supports()
        );
        Ok(())
    }
}
