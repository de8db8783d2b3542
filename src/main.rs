// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use chars_counter::{app, args::Args, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut stdout = std::io::stdout().lock();
    match app::run(&args, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            app::exit_code(&e)
        }
    }
}
