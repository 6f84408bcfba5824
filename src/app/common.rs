use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ConsistencyCommand,
    ProblemsCommand, SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use dungsem::{
    aa::AAFramework,
    io::{AspartixReader, InstanceReader},
    solvers::EnumerationLimits,
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let description =
        option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("an abstract argumentation semantics engine");
    let mut app = AppHelper::new(app_name, app_version, authors, description);
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(
            app_name,
            app_version,
            description,
            authors,
        )),
        Box::new(CheckCommand::new()),
        Box::new(ConsistencyCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
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
        .help("the input file that contains the AF (Aspartix format)")
        .required(true)
}

const ARG_MAX_DEPTH: &str = "MAX_DEPTH";
const ARG_MAX_SETS: &str = "MAX_SETS";

pub(crate) fn limits_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_MAX_DEPTH)
            .long("max-depth")
            .empty_values(false)
            .multiple(false)
            .help("bounds the depth of the admissible set search")
            .required(false),
        Arg::with_name(ARG_MAX_SETS)
            .long("max-sets")
            .empty_values(false)
            .multiple(false)
            .help("bounds the number of admissible sets the search may collect")
            .required(false),
    ]
}

pub(crate) fn read_limits(arg_matches: &ArgMatches<'_>) -> Result<EnumerationLimits> {
    let read_bound = |name: &str, flag: &str| -> Result<Option<usize>> {
        arg_matches
            .value_of(name)
            .map(|v| {
                v.parse::<usize>()
                    .map_err(|e| anyhow!("{}", e))
                    .with_context(|| format!(r#"while parsing the value "{}" of {}"#, v, flag))
            })
            .transpose()
    };
    let mut limits = EnumerationLimits::default();
    if let Some(d) = read_bound(ARG_MAX_DEPTH, "--max-depth")? {
        limits = limits.with_max_depth(d);
    }
    if let Some(s) = read_bound(ARG_MAX_SETS, "--max-sets")? {
        limits = limits.with_max_sets(s);
    }
    if !limits.is_unbounded() {
        info!(
            "admissible set search bounded by depth {:?} and set count {:?}",
            limits.max_depth(),
            limits.max_sets()
        );
    }
    Ok(limits)
}

pub(crate) fn read_input_file(arg_matches: &ArgMatches<'_>) -> Result<AAFramework<String>> {
    let file_path = arg_matches
        .value_of(ARG_INPUT)
        .ok_or_else(|| anyhow!("missing input file"))?;
    let mut reader = AspartixReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!(r#"while opening file "{}""#, file_path))?,
    );
    let af = reader
        .read(&mut file_reader)
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
