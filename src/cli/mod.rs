//! Command-line front end over the generator.

mod context;
mod flags;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;
pub use prompts::Prompts;

use crate::exits::Exit;

/// Run with the process arguments and map the outcome to an exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let context = match Context::new(&args) {
        Ok(context) => context,
        Err(exit) => return report(Prompts::default(), exit),
    };

    match context.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => report(context.prompts(), exit),
    }
}

fn report(prompts: Prompts, exit: Exit) -> ExitCode {
    match &exit {
        Exit::Done => {}
        Exit::Usage(msg) => {
            prompts.error(msg);
            prompts.error("Try 'passgen --help' for usage.");
        }
        Exit::Failed(msg) => prompts.error(&format!("passgen: {msg}")),
    }
    exit.code()
}

pub fn print_help() {
    println!(
        "\
passgen {version}
Random passwords from uppercase, lowercase, digit, and symbol classes.

USAGE:
    passgen [OPTIONS]

OPTIONS:
    -l, --length <N>          Password length (default 16)
    -n, --number <N>          Number of passwords (default 1)
        --no-upper            Exclude A-Z
        --no-lower            Exclude a-z
        --no-digits           Exclude 0-9
        --no-symbols          Exclude symbols
        --balanced            Give every enabled class an equal share per character
    -u, --urandom             Read entropy from /dev/urandom
        --entropy-file <PATH> Read entropy from a file or device
    -b, --board               Copy to clipboard
    -q, --quiet               Suppress warnings and prompts
    -h, --help                Show this help
    -v, --version             Show version

Set RUST_LOG=debug for diagnostics.",
        version = env!("CARGO_PKG_VERSION")
    );
}
