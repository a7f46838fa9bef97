//! taint-flags binary: query and decode the kernel taint status.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use taint_flags::{decode, list, load_status, parse_taint_query, render, TAINT_STATUS_FILE};

const EXIT_NORM: u8 = 0;
const EXIT_GENERIC: u8 = 1;
/// Reserved for allocation failure. The global allocator aborts the
/// process before this could be returned; the constant documents the
/// exit code contract.
#[allow(dead_code)]
const EXIT_MEM_ALLOC: u8 = 2;

/// One command word: `current`, `list`, or `taint=<flags>`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Current,
    List,
    Query(String),
}

fn parse_command(arg: &str) -> Result<Command, String> {
    match arg {
        "current" => Ok(Command::Current),
        "list" => Ok(Command::List),
        _ => match arg.strip_prefix("taint=") {
            Some(flags) => Ok(Command::Query(flags.to_string())),
            None => Err(format!("unrecognized command `{arg}`")),
        },
    }
}

/// Query and decode the kernel taint status.
#[derive(Debug, Parser)]
#[command(name = "taint-flags", version, about)]
#[command(after_help = "\
Commands:
  current        Display information about the current taint status of the running kernel
  list           List all known taint flags and their descriptions
  taint=<flags>  Display information about the specified taint flags")]
struct Cli {
    /// `current`, `list`, or `taint=<flags>`
    #[arg(value_name = "COMMAND", value_parser = parse_command)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_NORM,
                _ => EXIT_GENERIC,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Current => match load_status(TAINT_STATUS_FILE) {
            Ok(status) => {
                print!("{}", render::render_report(&decode(status)));
                ExitCode::from(EXIT_NORM)
            }
            Err(error) => {
                eprint!("{}", render::render_error(&error));
                ExitCode::from(EXIT_GENERIC)
            }
        },
        Command::List => {
            print!("{}", render::render_list(&list()));
            ExitCode::from(EXIT_NORM)
        }
        Command::Query(flags) => {
            let parsed = parse_taint_query(&flags);
            for warning in &parsed.warnings {
                eprint!("{}", render::render_warning(warning));
            }
            print!("{}", render::render_report(&decode(parsed.status)));
            ExitCode::from(EXIT_NORM)
        }
    }
}
