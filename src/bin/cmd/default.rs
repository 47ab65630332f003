use clap::{crate_version, Arg, Command};

pub fn command() -> Command {
    Command::new("copycheck")
        .version(crate_version!())
        .about("Heuristic quality checks for posts, proposals and skill docs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .long("log")
                .help("Set logging level")
                .value_name("LEVEL")
                .value_parser(["off", "trace", "debug", "info", "warn", "error"])
                .default_value("info")
                .ignore_case(true)
                .global(true),
        )
}
