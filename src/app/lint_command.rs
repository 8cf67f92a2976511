use super::{common, logging_level_cli_arg, Command};
use anyhow::{anyhow, Context, Result};
use clap::{AppSettings, Arg, SubCommand};
use log::info;
use rungcheck::{
    io::{ReportWriter, TextReportWriter},
    rules::{default_rules, Rule, Violation},
};
use std::{fs::File, io::BufWriter};

const CMD_NAME: &str = "lint";

const ARG_RULE: &str = "RULE";
const ARG_OUTPUT: &str = "OUTPUT";

pub(crate) struct LintCommand;

impl LintCommand {
    pub(crate) fn new() -> Self {
        LintCommand
    }
}

impl<'a> Command<'a> for LintCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> clap::App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a ladder program against the rule catalog")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_RULE)
                    .short("r")
                    .long("rule")
                    .empty_values(false)
                    .multiple(true)
                    .help("the name of a rule to check (defaults to the whole catalog)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_OUTPUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the file to write the report to (defaults to the standard output)")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let program = common::read_program_from_path(file)?;
        let rules = select_rules(arg_matches.values_of(ARG_RULE))?;
        let mut violations = Vec::new();
        for rule in &rules {
            let rule_violations = rule.check(&program)?;
            info!(
                "rule {} raised {} violation(s)",
                rule.name(),
                rule_violations.len()
            );
            violations.extend(rule_violations);
        }
        write_report(arg_matches.value_of(ARG_OUTPUT), &violations)?;
        if violations.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("found {} violation(s)", violations.len()))
        }
    }
}

fn select_rules(
    rule_names: Option<clap::Values<'_>>,
) -> Result<Vec<Box<dyn Rule<String>>>> {
    let catalog = default_rules::<String>();
    let names = match rule_names {
        Some(v) => v.collect::<Vec<&str>>(),
        None => return Ok(catalog),
    };
    for name in &names {
        if !catalog.iter().any(|r| r.name() == *name) {
            return Err(anyhow!(r#"no rule named "{}" in the catalog"#, name));
        }
    }
    Ok(catalog
        .into_iter()
        .filter(|r| names.contains(&r.name()))
        .collect())
}

fn write_report(output: Option<&str>, violations: &[Violation]) -> Result<()> {
    let writer = TextReportWriter;
    match output {
        Some(path) => {
            info!("writing the report to {}", path);
            let mut file_writer = BufWriter::new(
                File::create(path)
                    .with_context(|| format!(r#"while creating file "{}""#, path))?,
            );
            writer.write_report(&mut file_writer, violations)
        }
        None => writer.write_report(&mut std::io::stdout(), violations),
    }
}
