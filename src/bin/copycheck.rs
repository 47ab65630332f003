mod cmd;

use std::process::exit;

use console::Style;
use tracing_subscriber::EnvFilter;

const DEFAULT_ERR_EXIT_CODE: i32 = 1;

fn main() {
    let app = cmd::default::command()
        .subcommand(cmd::post_cmd::command())
        .subcommand(cmd::proposal_cmd::command())
        .subcommand(cmd::skill_cmd::command());

    let matches = app.get_matches();

    // LOG env var wins over the --log flag.
    let level = matches.get_one::<String>("log").map_or("info", String::as_str);
    let filter = EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let res = match matches.subcommand() {
        Some(("post", subcommand_matches)) => cmd::post_cmd::run(subcommand_matches),
        Some(("proposal", subcommand_matches)) => cmd::proposal_cmd::run(subcommand_matches),
        Some(("skill", subcommand_matches)) => cmd::skill_cmd::run(subcommand_matches),
        _ => unreachable!(),
    };

    let exit_with = match res {
        Ok(cmd) => {
            if let Some(message) = cmd.message {
                let style = if exitcode::is_success(cmd.code) {
                    Style::new().green()
                } else {
                    Style::new().red()
                };
                println!("{}", style.apply_to(message));
            }
            cmd.code
        }
        Err(err) => {
            eprintln!("{}", Style::new().red().apply_to(format!("\u{2717} {err}")));
            DEFAULT_ERR_EXIT_CODE
        }
    };
    exit(exit_with);
}
