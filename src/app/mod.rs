mod helper;
pub(crate) use helper::logging_level_cli_arg;
pub(crate) use helper::AppHelper;
pub(crate) use helper::Command;

pub(crate) mod common;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod chains_command;
pub(crate) use chains_command::ChainsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod lint_command;
pub(crate) use lint_command::LintCommand;

mod rules_command;
pub(crate) use rules_command::RulesCommand;
