//! hyperfixi CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use hyperfixi_runtime::cli::{self, CliError};
use hyperfixi_runtime::logging;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("\x1b[31mError: {message}\x1b[0m\nRun `hyperfixi --help` for usage.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let config = cli::parse_args(args)?;
    logging::init(config.verbosity);
    cli::run(&config, &mut io::stdout().lock())
}
