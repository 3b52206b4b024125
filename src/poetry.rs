//! Invocations of the `poetry` binary.
//!
//! Output is inherited so poetry's own progress reporting stays visible;
//! a non-zero exit status is surfaced as an error carrying the subcommand.

use std::process::Command;

use crate::error::{Result, UncapError};

/// Runs `poetry add` with the given package specs.
pub fn add(packages: &[String]) -> Result<()> {
    let mut args = vec!["add"];
    for package in packages {
        args.push(package);
    }
    run(&args)
}

/// Refreshes poetry.lock without bumping resolved versions.
pub fn lock() -> Result<()> {
    run(&["lock", "--no-update"])
}

/// Runs `poetry update`.
pub fn update() -> Result<()> {
    run(&["update"])
}

fn run(args: &[&str]) -> Result<()> {
    let command = args.join(" ");
    log::debug!("Running: poetry {command}");

    let status = Command::new("poetry")
        .args(args)
        .status()
        .map_err(|source| UncapError::PoetryCommand {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(UncapError::PoetryFailed { command, status });
    }

    Ok(())
}
