use std::path::{Path, PathBuf};

use clap::{Arg, ArgMatches, Command};
use copycheck::error::{Error, Result};
use copycheck::skill::{self, SkillProfile};
use copycheck::CmdExit;

pub fn command() -> Command {
    Command::new("skill")
        .about("Verify a skill directory: SKILL.md structure and reference files")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Skill directory containing SKILL.md")
                .value_name("PATH")
                .default_value("."),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("YAML file overriding the built-in skill profile")
                .value_name("PATH"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<CmdExit> {
    let dir = matches
        .get_one::<String>("dir")
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let profile = match matches.get_one::<String>("profile") {
        Some(path) => SkillProfile::from_yaml_file(Path::new(path))?,
        None => SkillProfile::sqlmodel(),
    };

    match skill::verify(&dir, &profile) {
        Ok(summary) => Ok(CmdExit::ok(format!(
            "\u{2713} {} skill valid ({} lines, {} reference files)",
            summary.name, summary.line_count, summary.reference_files
        ))),
        Err(Error::Structure(message)) => Ok(CmdExit::fail(format!("\u{2717} {message}"))),
        Err(err) => Err(err),
    }
}
