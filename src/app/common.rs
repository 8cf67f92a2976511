use super::{
    AppHelper, AuthorsCommand, ChainsCommand, CheckCommand, Command, LintCommand, RulesCommand,
};
use anyhow::{Context, Result};
use clap::Arg;
use log::{info, warn};
use rungcheck::{
    io::{LadderReader, ProgramReader},
    ladder::LadderProgram,
};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Rungcheck, a structural rule checker for ladder logic programs.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(ChainsCommand::new()),
        Box::new(CheckCommand::new()),
        Box::new(LintCommand::new()),
        Box::new(RulesCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the ladder program")
        .required(true)
}

pub(crate) fn read_program_from_path(file_path: &str) -> Result<LadderProgram<String>> {
    let mut reader = LadderReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    let program = reader.read(&mut file_reader)?;
    info!(
        "the ladder program has {} rung(s), {} element(s) and {} comment(s)",
        program.n_rungs(),
        program.n_elements(),
        program.n_comments(),
    );
    Ok(program)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
