//! Console front end printing every letter permutation of a keypad digit string.
//!
//! ```sh
//! keypad-permute            # prompts for digits on standard input
//! keypad-permute 258        # permutes the given digits
//! keypad-permute --count 2345679
//! ```
//!
//! Set `RUST_LOG=debug` to see what the engine is doing.

use std::{io, process::ExitCode};

use clap::Parser as _;
use keypad_cli::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match keypad_cli::run(&args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("permutation failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
