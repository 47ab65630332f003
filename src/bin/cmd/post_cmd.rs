use clap::{Arg, ArgAction, ArgMatches, Command};
use copycheck::error::Result;
use copycheck::report;
use copycheck::{post, CmdExit, Content};

pub fn command() -> Command {
    Command::new("post")
        .about("Verify a LinkedIn post meets quality standards for engagement")
        .arg(
            Arg::new("post")
                .short('p')
                .long("post")
                .help("Path to post file or post text")
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
    let Some(arg) = matches.get_one::<String>("post") else {
        return Ok(CmdExit::fail(
            "\u{2717} No post provided. Use --post 'path/to/post.txt' or --post 'inline text'",
        ));
    };

    let content = Content::resolve(arg, "Post")?;
    let report = post::evaluate(&content);

    let message = if matches.get_one::<String>("format").map(String::as_str) == Some("json") {
        report::render_json(&report)?
    } else {
        report::render_text(&report, &post::LABELS, matches.get_flag("verbose"))
    };

    Ok(CmdExit {
        code: if report.passed() { exitcode::OK } else { 1 },
        message: Some(message),
    })
}
