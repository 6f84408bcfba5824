use super::{cli_manager::logging_level_cli_arg, command::Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "authors";

/// Prints the name and version of the tool, its description, then one author per line.
pub(crate) struct AuthorsCommand<'a> {
    app_name: &'a str,
    app_version: &'a str,
    description: &'a str,
    authors: &'a str,
}

impl<'a> AuthorsCommand<'a> {
    pub(crate) fn new(
        app_name: &'a str,
        app_version: &'a str,
        description: &'a str,
        authors: &'a str,
    ) -> Self {
        AuthorsCommand {
            app_name,
            app_version,
            description,
            authors,
        }
    }

    fn about_text(&self) -> String {
        let mut text = format!(
            "{} {}\n{}\nauthors:\n",
            self.app_name, self.app_version, self.description
        );
        // cargo joins the package authors with colons
        self.authors
            .split(':')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .for_each(|a| {
                text.push_str("  ");
                text.push_str(a);
                text.push('\n');
            });
        text
    }
}

impl<'a> Command<'a> for AuthorsCommand<'a> {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the tool version, its description and its authors")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        print!("{}", self.about_text());
        Ok(())
    }
}
