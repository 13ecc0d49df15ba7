//! `seatmap`: lint, frame, generate and normalize seat map JSON files.
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see
//! what the engine does.

mod commands;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("seatmap: {err}");
            ExitCode::FAILURE
        }
    }
}
