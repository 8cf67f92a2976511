use super::{common, logging_level_cli_arg, Command};
use anyhow::Result;
use clap::{AppSettings, Arg, SubCommand};
use rungcheck::{
    analysis::ChainBuilder,
    ladder::ElementKind,
};

const CMD_NAME: &str = "chains";

const ARG_KIND: &str = "KIND";

pub(crate) struct ChainsCommand;

impl ChainsCommand {
    pub(crate) fn new() -> Self {
        ChainsCommand
    }
}

impl<'a> Command<'a> for ChainsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the maximal series chains of each rung")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_KIND)
                    .short("k")
                    .long("kind")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["contact", "coil", "all"])
                    .default_value("all")
                    .help("the kind of the elements to chain")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let program = common::read_program_from_path(file)?;
        let kinds = match arg_matches.value_of(ARG_KIND).unwrap() {
            "contact" => vec![ElementKind::Contact],
            "coil" => vec![ElementKind::Coil],
            "all" => vec![ElementKind::Contact, ElementKind::Coil],
            _ => unreachable!(),
        };
        let builder = ChainBuilder::default();
        for rung in program.iter_rungs() {
            let elements = rung.elements_of_kinds(&kinds);
            for chain in builder.build_chains(&elements)? {
                let variables = chain
                    .iter()
                    .map(|e| e.variable().to_string())
                    .collect::<Vec<String>>()
                    .join(" -> ");
                println!("{}: {}", rung.label(), variables);
            }
        }
        Ok(())
    }
}
