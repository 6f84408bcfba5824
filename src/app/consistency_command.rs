use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dungsem::engine::{EngineConfig, SemanticsEngine};
use log::{error, warn};

const CMD_NAME: &str = "consistency";

pub(crate) struct ConsistencyCommand;

impl ConsistencyCommand {
    pub(crate) fn new() -> Self {
        ConsistencyCommand
    }
}

impl<'a> Command<'a> for ConsistencyCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks the inclusion laws between the semantics of an AF")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::limits_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_input_file(arg_matches)?;
        let config = EngineConfig::default().with_limits(common::read_limits(arg_matches)?);
        let engine = SemanticsEngine::from_framework_with_config(af, config);
        let report = engine.check_semantics_consistency();
        if report.is_truncated() {
            warn!("the admissible set search was truncated; laws may fail spuriously");
        }
        for check in report.iter() {
            println!(
                "{}: {}",
                check.law(),
                if check.is_passed() { "OK" } else { "FAILED" }
            );
            check
                .violations()
                .iter()
                .for_each(|v| error!("{}: {}", check.law(), v));
        }
        if report.is_consistent() {
            Ok(())
        } else {
            let n_failed = report.iter().filter(|c| !c.is_passed()).count();
            Err(anyhow!("{} consistency law(s) failed", n_failed))
        }
    }
}
