mod args;
mod generator;
mod writer;

use std::process::ExitCode;

use args::CliArgs;
use clap::Parser;
use writer::write_log_file;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    println!(
        "Writing {} log lines to {} ({}% malformed)",
        args.lines(),
        args.output().display(),
        args.invalid_percent()
    );

    match write_log_file(
        args.output(),
        *args.lines(),
        *args.invalid_percent(),
        *args.seed(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to write log file: {e}");
            ExitCode::FAILURE
        }
    }
}
