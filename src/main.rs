use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::harden();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
