use super::{logging_level_cli_arg, Command};
use anyhow::Result;
use clap::{AppSettings, SubCommand};
use rungcheck::rules::default_rules;

const CMD_NAME: &str = "rules";

pub(crate) struct RulesCommand;

impl RulesCommand {
    pub(crate) fn new() -> Self {
        RulesCommand
    }
}

impl<'a> Command<'a> for RulesCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the rules of the catalog")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        for rule in default_rules::<String>() {
            println!("{}: {}", rule.name(), rule.description());
        }
        Ok(())
    }
}
