use super::{common, logging_level_cli_arg, Command};
use anyhow::Result;
use clap::{AppSettings, SubCommand};

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

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input ladder program files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        common::read_program_from_path(file).map(|_| ())
    }
}
