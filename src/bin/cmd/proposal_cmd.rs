use clap::{Arg, ArgAction, ArgMatches, Command};
use copycheck::error::Result;
use copycheck::report;
use copycheck::{proposal, CmdExit, Content};

pub fn command() -> Command {
    Command::new("proposal")
        .about("Verify an Upwork proposal meets winning standards for conversion")
        .arg(
            Arg::new("proposal")
                .short('p')
                .long("proposal")
                .help("Path to proposal file or proposal text")
                .value_name("TEXT|PATH"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show detailed analysis")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<CmdExit> {
    let Some(arg) = matches.get_one::<String>("proposal") else {
        return Ok(CmdExit::fail(
            "\u{2717} No proposal provided. Use --proposal 'path/to/proposal.txt' or --proposal 'inline text'",
        ));
    };

    let content = Content::resolve(arg, "Proposal")?;
    let report = proposal::evaluate(&content);

    let message = if matches.get_one::<String>("format").map(String::as_str) == Some("json") {
        report::render_json(&report)?
    } else {
        report::render_text(&report, &proposal::LABELS, matches.get_flag("verbose"))
    };

    Ok(CmdExit {
        code: if report.passed() { exitcode::OK } else { 1 },
        message: Some(message),
    })
}
