use std::process::ExitCode;

use clap::Parser;
use pomake::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    if !Arguments::has_any_argument(std::env::args_os()) {
        return ExitStatus::Failure.into();
    }

    let args = Arguments::parse_from(Arguments::normalize(std::env::args_os()));

    match pomake::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
