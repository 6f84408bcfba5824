// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::{app_helper::init_logger, app_helper::init_logger_with_level, command::Command};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        match app.clone().get_matches_from_safe(args.clone()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!("no such command: {}", name))?;
                let sub_matches =
                    sub_matches.ok_or_else(|| anyhow!("missing arguments for command {}", name))?;
                let log_level = sub_matches
                    .value_of(LOGGING_LEVEL_ARG)
                    .and_then(|l| log::LevelFilter::from_str(l).ok())
                    .unwrap_or(log::LevelFilter::Info);
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(sub_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, &args)
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, app: &mut App, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let words = args
            .iter()
            .skip(1)
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand = match words.as_slice() {
            [first, ..] if !HELP_STRINGS.contains(&first.as_str()) => Some(first),
            [_, second, ..] => Some(second),
            _ => None,
        };
        let mut message = Vec::new();
        match subcommand.and_then(|s| self.commands.iter().find(|c| c.name() == s.as_str())) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message)?,
            None => app.write_long_help(&mut message)?,
        }
        String::from_utf8_lossy(&message)
            .split('\n')
            .for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        command_involved: Rc<RefCell<bool>>,
        argument_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local")
                .about("a local command")
                .arg(Arg::with_name("flag").short("a"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.command_involved.borrow_mut() = true;
            if arg_matches.is_present("flag") {
                *self.argument_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn run(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app", "0.0.0", "author", "about");
        let command_involved = Rc::new(RefCell::new(false));
        let argument_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            command_involved: Rc::clone(&command_involved),
            argument_set: Rc::clone(&argument_set),
        }));
        manager.parse_cli(args)?;
        let result = (*command_involved.borrow(), *argument_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_involved() {
        assert_eq!((true, false), run(vec!["app", "local"]).unwrap());
    }

    #[test]
    fn test_command_and_arg_involved() {
        assert_eq!((true, true), run(vec!["app", "local", "-a"]).unwrap());
    }

    #[test]
    fn test_logging_level() {
        assert_eq!(
            (true, false),
            run(vec!["app", "local", "--logging-level", "off"]).unwrap()
        );
    }

    #[test]
    fn test_no_subcommand() {
        assert!(run(vec!["app"]).is_err());
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(run(vec!["app", "foo"]).is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(run(vec!["app", "local", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!((false, false), run(vec!["app", "-h"]).unwrap());
    }

    #[test]
    fn test_help_for_subcommand() {
        assert_eq!((false, false), run(vec!["app", "help", "local"]).unwrap());
    }

    #[test]
    fn test_subcommand_help() {
        assert_eq!((false, false), run(vec!["app", "local", "-h"]).unwrap());
    }
}
