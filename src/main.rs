//! Binary entry point for `poetry-uncap`.

use std::process;

fn main() {
    if let Err(e) = poetry_uncap::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
