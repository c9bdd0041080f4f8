use clap::Parser;
use magrename::cli::{Args, run_cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run_cli(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
