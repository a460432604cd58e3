mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod batch_command;
pub(crate) use batch_command::BatchCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod semantics_command;
pub(crate) use semantics_command::SemanticsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;
