use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungsem::{
    aa::{AAFramework, Argument, LabelType, Query, Semantics},
    io::{AspartixWriter, ResponseWriter},
    solvers::{
        AdmissibleSemanticsSolver, CompleteSemanticsSolver, CredulousAcceptanceComputer,
        EnumerationLimits, ExtensionEnumerator, GroundedSemanticsSolver, IdealSemanticsSolver,
        PreferredSemanticsSolver, SingleExtensionComputer, SkepticalAcceptanceComputer,
        StableSemanticsSolver,
    },
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve (XX-YY, see the problems command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("prints an extension justifying the answer of DC/DS queries, when available")
                    .required(false),
            )
            .args(&common::limits_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_input_file(arg_matches)?;
        let limits = common::read_limits(arg_matches)?;
        let problem = arg_matches
            .value_of(ARG_PROBLEM)
            .ok_or_else(|| anyhow!("missing problem"))?;
        let (query, semantics) = dungsem::aa::read_problem_string(problem)?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| af.argument_set().get_argument(&a.to_string()))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        check_arg_definition(query, &arg)?;
        let mut solver = create_solver(&af, semantics, limits);
        let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
        let writer = AspartixWriter::default();
        let mut out = std::io::stdout();
        match (query, arg) {
            (Query::SE, _) => match solver.compute_one_extension() {
                Some(ext) => writer.write_single_extension(&mut out, &ext),
                None => writer.write_no_extension(&mut out),
            },
            (Query::EE, _) => {
                let extensions = solver.enumerate_extensions();
                info!("found {} extension(s)", extensions.len());
                writer.write_extensions(&mut out, &extensions)
            }
            (Query::DC, Some(a)) => {
                let (status, certificate) = if with_certificate {
                    solver.is_credulously_accepted_with_certificate(a)
                } else {
                    (solver.is_credulously_accepted(a), None)
                };
                write_acceptance(&writer, &mut out, status, certificate)
            }
            (Query::DS, Some(a)) => {
                let (status, certificate) = if with_certificate {
                    solver.is_skeptically_accepted_with_certificate(a)
                } else {
                    (solver.is_skeptically_accepted(a), None)
                };
                write_acceptance(&writer, &mut out, status, certificate)
            }
            (Query::DC, None) | (Query::DS, None) => {
                Err(anyhow!("missing argument for query {}", query.as_ref()))
            }
        }
    }
}

/// The queries a semantics solver must answer to be used by this command.
trait SemanticsSolver<T>:
    SingleExtensionComputer<T>
    + ExtensionEnumerator<T>
    + CredulousAcceptanceComputer<T>
    + SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
}

impl<T, S> SemanticsSolver<T> for S
where
    T: LabelType,
    S: SingleExtensionComputer<T>
        + ExtensionEnumerator<T>
        + CredulousAcceptanceComputer<T>
        + SkepticalAcceptanceComputer<T>,
{
}

fn create_solver<'a>(
    af: &'a AAFramework<String>,
    semantics: Semantics,
    limits: EnumerationLimits,
) -> Box<dyn SemanticsSolver<String> + 'a> {
    match semantics {
        Semantics::AD => Box::new(AdmissibleSemanticsSolver::new_with_limits(af, limits)),
        Semantics::CO => Box::new(CompleteSemanticsSolver::new_with_limits(af, limits)),
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(PreferredSemanticsSolver::new_with_limits(af, limits)),
        Semantics::ST => Box::new(StableSemanticsSolver::new_with_limits(af, limits)),
        Semantics::ID => Box::new(IdealSemanticsSolver::new_with_limits(af, limits)),
    }
}

fn check_arg_definition(query: Query, arg: &Option<&Argument<String>>) -> Result<()> {
    match (query.requires_argument(), arg.is_some()) {
        (true, false) => Err(anyhow!(
            "missing argument on the command line (required for query {})",
            query.as_ref()
        )),
        (false, true) => {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                query.as_ref()
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

fn write_acceptance(
    writer: &AspartixWriter,
    out: &mut dyn std::io::Write,
    status: bool,
    certificate: Option<Vec<&Argument<String>>>,
) -> Result<()> {
    writer.write_acceptance_status(out, status)?;
    if let Some(c) = certificate {
        writer.write_single_extension(out, &c)?;
    }
    Ok(())
}
